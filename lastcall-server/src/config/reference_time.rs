//! Reference times given on the command line.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use super::ConfigError;

/// Parse `HH:MM` (on `today`) or `YYYY-MM-DD HH:MM` as a local instant.
///
/// Where the local clock repeats an hour the earlier instant is used.
pub fn parse_reference_time(text: &str, today: NaiveDate) -> Result<DateTime<Local>, ConfigError> {
    let text = text.trim();
    let invalid = || ConfigError::InvalidValue {
        name: "reference time",
        value: text.to_string(),
    };

    let naive = match NaiveTime::parse_from_str(text, "%H:%M") {
        Ok(time) => today.and_time(time),
        Err(_) => NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M").map_err(|_| invalid())?,
    };

    Local.from_local_datetime(&naive).earliest().ok_or_else(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2015, 10, 5).unwrap()
    }

    #[test]
    fn time_only_is_today() {
        let t = parse_reference_time("10:30", today()).unwrap();
        assert_eq!(t.date_naive(), today());
        assert_eq!((t.hour(), t.minute()), (10, 30));
    }

    #[test]
    fn full_date_and_time() {
        let t = parse_reference_time(" 2015-10-06 00:00 ", today()).unwrap();
        assert_eq!(t.day(), 6);
        assert_eq!((t.hour(), t.minute()), (0, 0));
    }

    #[test]
    fn garbage_is_rejected() {
        for bad in ["", "25:00", "10.30", "tomorrow", "2015-13-01 10:00"] {
            assert!(
                matches!(
                    parse_reference_time(bad, today()),
                    Err(ConfigError::InvalidValue { .. })
                ),
                "{bad:?} should be rejected"
            );
        }
    }
}
