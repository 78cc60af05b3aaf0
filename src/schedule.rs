use crate::error::{AgendaError, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Day classification the clinic schedule is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayClass {
    Weekday,
    Saturday,
    Sunday,
}

impl DayClass {
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Sat => Self::Saturday,
            _ => Self::Weekday,
        }
    }
}

/// Inclusive operating window, in minutes since midnight.
///
/// The upper bound is inclusive: an appointment at exactly `end` is still
/// accepted (19:00 on a weekday, 14:00 on a Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub start_min: u32,
    pub end_min: u32,
}

impl Window {
    #[must_use]
    pub fn contains(&self, minutes: u32) -> bool {
        minutes >= self.start_min && minutes <= self.end_min
    }

    #[must_use]
    pub fn start_label(&self) -> String {
        format_minutes(self.start_min)
    }

    #[must_use]
    pub fn end_label(&self) -> String {
        format_minutes(self.end_min)
    }
}

pub const WEEKDAY_HOURS: Window = Window {
    start_min: 8 * 60,
    end_min: 19 * 60,
};

pub const SATURDAY_HOURS: Window = Window {
    start_min: 8 * 60,
    end_min: 14 * 60,
};

/// Operating window for a day classification, `None` when closed.
#[must_use]
pub fn window_for(day: DayClass) -> Option<Window> {
    match day {
        DayClass::Weekday => Some(WEEKDAY_HOURS),
        DayClass::Saturday => Some(SATURDAY_HOURS),
        DayClass::Sunday => None,
    }
}

fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Parse a `YYYY-MM-DD` date string as produced by a date input
///
/// # Errors
///
/// Returns `MalformedDate` if the string is not a valid calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AgendaError::MalformedDate)
}

/// Parse an `HH:MM` time string as produced by a time input
///
/// # Errors
///
/// Returns `MalformedTime` if the string is not a valid clock time
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| AgendaError::MalformedTime)
}

/// Check whether the clinic accepts appointments at the given date and time
///
/// Pure: the verdict depends only on the date's day-of-week and the clock
/// time. Past dates are not rejected here.
///
/// # Errors
///
/// Returns `ClosedOnSunday` for Sundays and `OutsideHours` when the time
/// falls outside the applicable window (bounds per `Window`, end inclusive)
pub fn validate(date: NaiveDate, time: NaiveTime) -> Result {
    let day = DayClass::from_date(date);
    let Some(window) = window_for(day) else {
        return Err(AgendaError::ClosedOnSunday);
    };

    let minutes = time.hour() * 60 + time.minute();
    if !window.contains(minutes) {
        return Err(AgendaError::OutsideHours {
            day,
            start: window.start_label(),
            end: window.end_label(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-01 was a Monday, so the first week of 2024 anchors every
    // day class: 01=Mon .. 06=Sat, 07=Sun.
    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    #[test]
    fn test_day_classification() {
        assert_eq!(DayClass::from_date(date(1)), DayClass::Weekday);
        assert_eq!(DayClass::from_date(date(5)), DayClass::Weekday);
        assert_eq!(DayClass::from_date(date(6)), DayClass::Saturday);
        assert_eq!(DayClass::from_date(date(7)), DayClass::Sunday);
    }

    #[test]
    fn test_sunday_closed_at_any_time() {
        for t in ["00:00", "08:00", "12:00", "19:00", "23:59"] {
            assert_eq!(
                validate(date(7), time(t)),
                Err(AgendaError::ClosedOnSunday)
            );
        }
    }

    #[test]
    fn test_weekday_boundaries() {
        assert!(validate(date(1), time("08:00")).is_ok());
        assert!(validate(date(1), time("19:00")).is_ok());
        assert!(validate(date(1), time("07:59")).is_err());
        assert!(validate(date(1), time("19:01")).is_err());
    }

    #[test]
    fn test_saturday_boundaries() {
        assert!(validate(date(6), time("08:00")).is_ok());
        assert!(validate(date(6), time("14:00")).is_ok());
        assert!(validate(date(6), time("07:59")).is_err());
        assert!(validate(date(6), time("14:01")).is_err());
    }

    #[test]
    fn test_out_of_hours_message_names_the_window() {
        let err = validate(date(6), time("15:00")).unwrap_err();
        let msg = err.to_portuguese();
        assert!(msg.contains("08:00"));
        assert!(msg.contains("14:00"));
        assert!(msg.contains("sábados"));

        let err = validate(date(3), time("20:00")).unwrap_err();
        let msg = err.to_portuguese();
        assert!(msg.contains("08:00"));
        assert!(msg.contains("19:00"));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let first = validate(date(2), time("10:00"));
        let second = validate(date(2), time("10:00"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-06").is_ok());
        assert_eq!(parse_date("06/01/2024"), Err(AgendaError::MalformedDate));
        assert_eq!(parse_date("2024-02-30"), Err(AgendaError::MalformedDate));
        assert_eq!(parse_date(""), Err(AgendaError::MalformedDate));
    }

    #[test]
    fn test_parse_time() {
        assert!(parse_time("08:00").is_ok());
        assert!(parse_time("23:59").is_ok());
        assert_eq!(parse_time("25:00"), Err(AgendaError::MalformedTime));
        assert_eq!(parse_time("ab:cd"), Err(AgendaError::MalformedTime));
        assert_eq!(parse_time(""), Err(AgendaError::MalformedTime));
    }

    #[test]
    fn test_window_labels() {
        assert_eq!(WEEKDAY_HOURS.start_label(), "08:00");
        assert_eq!(WEEKDAY_HOURS.end_label(), "19:00");
        assert_eq!(SATURDAY_HOURS.end_label(), "14:00");
    }
}
