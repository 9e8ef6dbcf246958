use crate::schedule::clock::NowInstant;
use crate::schedule::model::{PrayerEntry, ScheduleModel};

/// What the radial clock-face view should draw: the subset of prayers that
/// fit on the dial right now, and which of them to highlight as next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockFaceView<'a> {
    pub visible: Vec<&'a PrayerEntry>,
    pub highlighted: usize,
}

/// The dial cannot show all markers without clutter, so the product rule
/// is: in the Isha→Fajr window (late evening through pre-dawn) only Fajr
/// is on the dial; the rest of the day shows everything except Fajr.
/// The highlight is the first visible adhan still ahead of `now`, or the
/// last visible entry once the whole set has passed.
pub fn clock_face<'a>(schedule: &'a ScheduleModel, now: NowInstant) -> ClockFaceView<'a> {
    let entries = schedule.entries();
    let now_minutes = now.minutes_since_midnight();
    let fajr = &entries[0];
    let isha = &entries[entries.len() - 1];

    let after_isha = now_minutes > isha.adhan.minutes_since_midnight();
    let before_fajr = now_minutes < fajr.adhan.minutes_since_midnight();

    let visible: Vec<&PrayerEntry> = if after_isha || before_fajr {
        vec![fajr]
    } else {
        entries.iter().skip(1).collect()
    };

    let highlighted = visible
        .iter()
        .position(|entry| entry.adhan.minutes_since_midnight() > now_minutes)
        .unwrap_or(visible.len() - 1);

    ClockFaceView {
        visible,
        highlighted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrayerName;
    use crate::schedule::model::tests::full_day;

    fn schedule() -> ScheduleModel {
        // Fajr 04:15, Isha 21:00
        ScheduleModel::from_day_timings(&full_day()).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NowInstant {
        NowInstant::from_hms(hour, minute, 0).unwrap()
    }

    fn names(view: &ClockFaceView) -> Vec<PrayerName> {
        view.visible.iter().map(|e| e.name).collect()
    }

    #[test]
    fn after_isha_shows_only_fajr() {
        let schedule = schedule();
        let view = clock_face(&schedule, at(22, 0));
        assert_eq!(names(&view), vec![PrayerName::Fajr]);
        assert_eq!(view.highlighted, 0);
    }

    #[test]
    fn pre_dawn_shows_only_fajr() {
        let schedule = schedule();
        let view = clock_face(&schedule, at(3, 0));
        assert_eq!(names(&view), vec![PrayerName::Fajr]);
    }

    #[test]
    fn daytime_shows_all_but_fajr_with_next_highlighted() {
        let schedule = schedule();
        let view = clock_face(&schedule, at(10, 0));
        assert_eq!(
            names(&view),
            vec![
                PrayerName::Dhuhr,
                PrayerName::Asr,
                PrayerName::Maghrib,
                PrayerName::Isha
            ]
        );
        assert_eq!(view.visible[view.highlighted].name, PrayerName::Dhuhr);

        let view = clock_face(&schedule, at(17, 0));
        assert_eq!(view.visible[view.highlighted].name, PrayerName::Maghrib);
    }

    #[test]
    fn exactly_at_isha_highlights_the_last_entry() {
        // 21:00 is not yet "after Isha", and every visible adhan has
        // passed, so the dial settles on Isha itself.
        let schedule = schedule();
        let view = clock_face(&schedule, at(21, 0));
        assert_eq!(names(&view).len(), 4);
        assert_eq!(view.visible[view.highlighted].name, PrayerName::Isha);
    }

    #[test]
    fn exactly_at_fajr_switches_to_the_day_set() {
        let schedule = schedule();
        let view = clock_face(&schedule, at(4, 15));
        assert_eq!(names(&view).len(), 4);
        assert_eq!(view.visible[view.highlighted].name, PrayerName::Dhuhr);
    }
}
