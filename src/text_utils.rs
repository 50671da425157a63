use chrono::{Datelike, NaiveDate};

/// Date portion of a front-matter date such as `2024-04-03 10:30`.
///
/// The first space is turned into a `T` separator, as in an ISO date-time,
/// and everything from the first `T` on is dropped.
pub fn date_portion(raw_date: &str) -> String {
    let iso = raw_date.trim().replacen(' ', "T", 1);
    match iso.split_once('T') {
        Some((date, _time)) => date.to_string(),
        None => iso,
    }
}

pub fn parse_post_date(raw_date: &str) -> Result<NaiveDate, String> {
    let date = date_portion(raw_date);
    NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|e| format!("Unable to parse date {}: {}", raw_date, e))
}

/// Renders a date the way posts display it, e.g. `April 3, 2024`.
pub fn format_long_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Year and display date for a raw front-matter date.
pub fn derive_date_fields(raw_date: &str) -> Result<(i32, String), String> {
    let date = parse_post_date(raw_date)?;
    Ok((date.year(), format_long_date(&date)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_portion() {
        assert_eq!(date_portion("2024-04-03 10:30"), "2024-04-03");
        assert_eq!(date_portion("2024-04-03T10:30"), "2024-04-03");
        assert_eq!(date_portion("2024-04-03"), "2024-04-03");
        assert_eq!(date_portion("  2024-04-03 10:30 extra "), "2024-04-03");
    }

    #[test]
    fn test_derive_date_fields() {
        let (year, formatted) = derive_date_fields("2024-04-03 10:30").unwrap();
        assert_eq!(year, 2024);
        assert_eq!(formatted, "April 3, 2024");

        let (year, formatted) = derive_date_fields("2019-12-25").unwrap();
        assert_eq!(year, 2019);
        assert_eq!(formatted, "December 25, 2019");
    }

    #[test]
    fn test_formatted_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 9).unwrap();
        let formatted = format_long_date(&date);
        assert_eq!(formatted, "January 9, 2023");
        assert_eq!(NaiveDate::parse_from_str(&formatted, "%B %d, %Y").unwrap(), date);
    }

    #[test]
    fn test_invalid_dates() {
        assert!(parse_post_date("2024-13-01").is_err());
        assert!(parse_post_date("2024-02-30 10:00").is_err());
        assert!(parse_post_date("yesterday").is_err());
        assert!(parse_post_date("").is_err());
    }
}
