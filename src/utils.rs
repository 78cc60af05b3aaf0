use chrono::{Local, NaiveDate};

/// Today's date in the host's local time, the lower bound offered for the
/// appointment date.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`, the format the date field expects
#[must_use]
pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule;

    #[test]
    fn test_today_iso_round_trips_through_the_parser() {
        let iso = today_iso();
        assert_eq!(schedule::parse_date(&iso).unwrap(), today());
    }
}
