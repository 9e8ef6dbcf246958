#![allow(dead_code)]
use std::fmt;
use std::str::FromStr;

use chrono::Timelike;
use thiserror::Error;

pub const MINUTES_PER_DAY: i32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed time string: {raw:?}")]
pub struct MalformedTimeError {
    pub raw: String,
}

/// A wall-clock time of day with minute precision, held as minutes since
/// midnight. Carries no date or timezone; two values are only comparable
/// within the same calendar day.
///
/// Venues publish times in a mix of `"HH:mm"` and `"H:mm AM/PM"` (meridiem
/// in any case), so construction goes through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(ClockTime {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    pub fn minutes_since_midnight(&self) -> i32 {
        self.minutes as i32
    }

    pub fn hour(&self) -> u32 {
        (self.minutes / 60) as u32
    }

    pub fn minute(&self) -> u32 {
        (self.minutes % 60) as u32
    }

    /// `"h:mm AM/PM"` for the timetable views.
    pub fn format_12h(&self) -> String {
        let meridiem = if self.hour() < 12 { "AM" } else { "PM" };
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour, self.minute(), meridiem)
    }

    /// `"H:mm"` (24-hour, no leading zero on the hour) for the digital
    /// clock views.
    pub fn format_compact(&self) -> String {
        format!("{}:{:02}", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_compact())
    }
}

impl FromStr for ClockTime {
    type Err = MalformedTimeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let malformed = || MalformedTimeError {
            raw: raw.to_string(),
        };

        let trimmed = raw.trim();
        let (digits, meridiem) = match trimmed.split_once(' ') {
            Some((d, rest)) => (d, Some(rest.trim())),
            None => (trimmed, None),
        };

        let (h, m) = digits.split_once(':').ok_or_else(malformed)?;
        let mut hour: u32 = h.parse().map_err(|_| malformed())?;
        let minute: u32 = m.parse().map_err(|_| malformed())?;

        match meridiem {
            Some(tok) if tok.eq_ignore_ascii_case("pm") => {
                if hour != 12 {
                    hour += 12;
                }
            }
            Some(tok) if tok.eq_ignore_ascii_case("am") => {
                if hour == 12 {
                    hour = 0;
                }
            }
            Some(_) => return Err(malformed()),
            None => {}
        }

        ClockTime::from_hm(hour, minute).ok_or_else(malformed)
    }
}

/// The current wall-clock time, refreshed once per second by the host tick.
/// Seconds are carried only for sub-minute display; all schedule math is in
/// whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowInstant {
    minutes: u16,
    seconds: u8,
}

impl NowInstant {
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(NowInstant {
            minutes: (hour * 60 + minute) as u16,
            seconds: second as u8,
        })
    }

    pub fn from_local(time: chrono::NaiveTime) -> Self {
        NowInstant {
            minutes: (time.hour() * 60 + time.minute()) as u16,
            seconds: time.second().min(59) as u8,
        }
    }

    pub fn minutes_since_midnight(&self) -> i32 {
        self.minutes as i32
    }

    pub fn seconds(&self) -> u32 {
        self.seconds as u32
    }

    pub fn clock_time(&self) -> ClockTime {
        ClockTime {
            minutes: self.minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn parses_24_hour() {
        assert_eq!(parse("04:15").minutes_since_midnight(), 4 * 60 + 15);
        assert_eq!(parse("0:05").minutes_since_midnight(), 5);
        assert_eq!(parse("23:59").minutes_since_midnight(), 23 * 60 + 59);
    }

    #[test]
    fn parses_meridiem_any_case() {
        assert_eq!(parse("1:30 PM").minutes_since_midnight(), 13 * 60 + 30);
        assert_eq!(parse("1:30 pm").minutes_since_midnight(), 13 * 60 + 30);
        assert_eq!(parse("09:00 Am").minutes_since_midnight(), 9 * 60);
    }

    #[test]
    fn twelve_is_special() {
        // 12 PM stays noon, 12 AM wraps to midnight
        assert_eq!(parse("12:30 PM").minutes_since_midnight(), 12 * 60 + 30);
        assert_eq!(parse("12:30 AM").minutes_since_midnight(), 30);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!("24:00".parse::<ClockTime>().is_err());
        assert!("7:60".parse::<ClockTime>().is_err());
        assert!("7.30".parse::<ClockTime>().is_err());
        assert!("13:00 PM".parse::<ClockTime>().is_err());
        assert!("9:15 XM".parse::<ClockTime>().is_err());
        assert!("".parse::<ClockTime>().is_err());
        assert!("-1:30".parse::<ClockTime>().is_err());
    }

    #[test]
    fn format_12h_round_trips() {
        for raw in ["5:45 AM", "05:45 am", "12:00 PM", "12:05 AM", "11:59 pm"] {
            let once = parse(raw);
            let again = parse(&once.format_12h());
            assert_eq!(once, again, "round-trip failed for {raw:?}");
        }
        assert_eq!(parse("13:05").format_12h(), "1:05 PM");
        assert_eq!(parse("00:10").format_12h(), "12:10 AM");
    }

    #[test]
    fn format_compact_has_no_leading_zero() {
        assert_eq!(parse("04:15").format_compact(), "4:15");
        assert_eq!(parse("16:05").format_compact(), "16:05");
        assert_eq!(ClockTime::MIDNIGHT.format_compact(), "0:00");
    }

    #[test]
    fn now_instant_carries_seconds() {
        let now = NowInstant::from_hms(21, 15, 42).unwrap();
        assert_eq!(now.minutes_since_midnight(), 21 * 60 + 15);
        assert_eq!(now.seconds(), 42);
        assert_eq!(now.clock_time(), parse("21:15"));
        assert!(NowInstant::from_hms(24, 0, 0).is_none());
    }
}
