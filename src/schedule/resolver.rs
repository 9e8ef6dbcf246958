use crate::schedule::clock::{ClockTime, NowInstant, MINUTES_PER_DAY};
use crate::schedule::model::{PrayerEntry, ScheduleModel};

/// The next upcoming event and how many whole minutes remain until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextEvent<'a> {
    pub entry: &'a PrayerEntry,
    pub minutes_remaining: i32,
}

/// Finds the prayer whose adhan comes up next. A time at or before `now`
/// counts as already passed today and competes as tomorrow's occurrence
/// (+24h), which keeps the scan a uniform minimum over strictly positive
/// deltas across the Isha→Fajr gap. Ties keep canonical order.
pub fn resolve_next<'a>(schedule: &'a ScheduleModel, now: NowInstant) -> Option<NextEvent<'a>> {
    scan(schedule, now, |entry| entry.adhan)
}

/// Same scan against the iqamah times; feeds the footer countdown.
pub fn resolve_next_iqamah<'a>(
    schedule: &'a ScheduleModel,
    now: NowInstant,
) -> Option<NextEvent<'a>> {
    scan(schedule, now, |entry| entry.iqamah)
}

fn scan<'a>(
    schedule: &'a ScheduleModel,
    now: NowInstant,
    time_of: impl Fn(&PrayerEntry) -> ClockTime,
) -> Option<NextEvent<'a>> {
    let now_minutes = now.minutes_since_midnight();
    let mut next: Option<NextEvent<'a>> = None;
    for entry in schedule.entries() {
        let mut delta = time_of(entry).minutes_since_midnight() - now_minutes;
        if delta <= 0 {
            delta += MINUTES_PER_DAY;
        }
        let closer = match &next {
            Some(best) => delta < best.minutes_remaining,
            None => true,
        };
        if closer {
            next = Some(NextEvent {
                entry,
                minutes_remaining: delta,
            });
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrayerName;
    use crate::schedule::model::tests::{day, full_day};

    fn schedule() -> ScheduleModel {
        ScheduleModel::from_day_timings(&full_day()).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NowInstant {
        NowInstant::from_hms(hour, minute, 0).unwrap()
    }

    #[test]
    fn picks_first_future_adhan() {
        let schedule = schedule();
        let next = resolve_next(&schedule, at(10, 0)).unwrap();
        assert_eq!(next.entry.name, PrayerName::Dhuhr);
        assert_eq!(next.minutes_remaining, 2 * 60 + 30);
    }

    #[test]
    fn is_idempotent_and_always_yields_one() {
        let schedule = schedule();
        for hour in 0..24 {
            let now = at(hour, 17);
            let a = resolve_next(&schedule, now).unwrap();
            let b = resolve_next(&schedule, now).unwrap();
            assert_eq!(a, b);
            assert!(a.minutes_remaining > 0);
        }
    }

    #[test]
    fn exact_adhan_time_counts_as_passed() {
        let schedule = schedule();
        // 12:30 is Dhuhr's adhan; Dhuhr is no longer next
        let next = resolve_next(&schedule, at(12, 30)).unwrap();
        assert_eq!(next.entry.name, PrayerName::Asr);
    }

    #[test]
    fn rolls_over_to_tomorrows_fajr() {
        let mut day = full_day();
        day.timings
            .insert("Fajr".to_string(), "04:30".to_string());
        day.timings
            .insert("Isha".to_string(), "20:15".to_string());
        let schedule = ScheduleModel::from_day_timings(&day).unwrap();

        let next = resolve_next(&schedule, at(23, 59)).unwrap();
        assert_eq!(next.entry.name, PrayerName::Fajr);
        assert_eq!(next.minutes_remaining, 271);
    }

    #[test]
    fn ties_resolve_to_canonical_order() {
        let day = day(
            &[
                ("Fajr", "04:15"),
                ("Dhuhr", "13:00"),
                ("Asr", "13:00"),
                ("Maghrib", "19:45"),
                ("Isha", "21:00"),
            ],
            &[],
        );
        let schedule = ScheduleModel::from_day_timings(&day).unwrap();
        let next = resolve_next(&schedule, at(9, 0)).unwrap();
        assert_eq!(next.entry.name, PrayerName::Dhuhr);
    }

    #[test]
    fn iqamah_scan_uses_iqamah_times() {
        let schedule = schedule();
        // 12:35 is after Dhuhr's adhan (12:30) but before its iqamah (12:45)
        let next = resolve_next_iqamah(&schedule, at(12, 35)).unwrap();
        assert_eq!(next.entry.name, PrayerName::Dhuhr);
        assert_eq!(next.minutes_remaining, 10);

        let adhan_next = resolve_next(&schedule, at(12, 35)).unwrap();
        assert_eq!(adhan_next.entry.name, PrayerName::Asr);
    }
}
