/// Format a countdown of whole minutes as "X hr Y min" / "X min".
///
/// The hour unit pluralizes ("2 hrs"); the minute clause is dropped when
/// it would read "0 min" after a whole number of hours. A zero countdown
/// still renders as "0 min", never an empty string.
pub fn format_countdown(minutes: i64) -> String {
    if minutes > 60 {
        let hours = minutes / 60;
        let mins = minutes % 60;
        let mut out = format!("{} hr{}", hours, if hours == 1 { "" } else { "s" });
        if mins > 0 {
            out.push_str(&format!(" {} min", mins));
        }
        out
    } else {
        format!("{} min", minutes.max(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_explicitly() {
        assert_eq!(format_countdown(0), "0 min");
    }

    #[test]
    fn under_an_hour_is_minutes_only() {
        assert_eq!(format_countdown(1), "1 min");
        assert_eq!(format_countdown(59), "59 min");
        assert_eq!(format_countdown(60), "60 min");
    }

    #[test]
    fn over_an_hour_splits_units() {
        assert_eq!(format_countdown(61), "1 hr 1 min");
        assert_eq!(format_countdown(120), "2 hrs");
        assert_eq!(format_countdown(135), "2 hrs 15 min");
        assert_eq!(format_countdown(271), "4 hrs 31 min");
    }

    #[test]
    fn negative_input_clamps_to_zero() {
        assert_eq!(format_countdown(-5), "0 min");
    }
}
