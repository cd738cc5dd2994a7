use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

/// chrono needs a day of month, so month labels are parsed as the first day.
const MONTH_LABEL_FORMAT: &str = "%d-%B-%y";

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

#[must_use]
pub fn unix_seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis((seconds * 1000.0).round() as i64)
}

/// Parses a `Month-YY` label such as `November-16` into midnight UTC on the
/// first day of that month.
///
/// Two-digit years resolve with chrono's `%y` pivot (`16` is 2016, `99` is 1999).
/// The month must be spelled out in full; `Nov-16` is rejected.
pub fn parse_month(label: &str) -> ChartResult<DateTime<Utc>> {
    let trimmed = label.trim();
    let date = NaiveDate::parse_from_str(&format!("01-{trimmed}"), MONTH_LABEL_FORMAT)
        .map_err(|err| ChartError::InvalidData(format!("invalid month `{trimmed}`: {err}")))?;

    let full_name = date.format("%B").to_string();
    let written_name = trimmed.split_once('-').map_or(trimmed, |(name, _)| name);
    if !written_name.eq_ignore_ascii_case(&full_name) {
        return Err(ChartError::InvalidData(format!(
            "invalid month `{trimmed}`: expected full month name `{full_name}`"
        )));
    }

    Ok(date.and_time(NaiveTime::MIN).and_utc())
}

/// Parses a decimal price string into a finite `f64`.
pub fn parse_price(raw: &str) -> ChartResult<f64> {
    let trimmed = raw.trim();
    let decimal: Decimal = trimmed
        .parse()
        .map_err(|err| ChartError::InvalidData(format!("invalid price `{trimmed}`: {err}")))?;
    decimal_to_f64(decimal, "price")
}

/// Derives the selection tag for a region: lowercase with every character
/// outside `a-z` removed (`West South Central` becomes `westsouthcentral`).
#[must_use]
pub fn region_tag(region: &str) -> String {
    region
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn month_labels_use_two_digit_year_pivot() {
        let recent = parse_month("November-16").expect("parse");
        assert_eq!((recent.year(), recent.month(), recent.day()), (2016, 11, 1));

        let older = parse_month("March-99").expect("parse");
        assert_eq!(older.year(), 1999);
    }

    #[test]
    fn month_label_without_year_is_rejected() {
        assert!(parse_month("November").is_err());
        assert!(parse_month("").is_err());
    }

    #[test]
    fn abbreviated_month_names_are_rejected() {
        assert!(parse_month("Nov-16").is_err());
        assert!(parse_month("Sept-16").is_err());
        assert!(parse_month("november-16").is_ok());
    }

    #[test]
    fn region_tag_strips_non_letters() {
        assert_eq!(region_tag("West South Central"), "westsouthcentral");
        assert_eq!(region_tag("U.S."), "us");
        assert_eq!(region_tag("US"), "us");
    }

    #[test]
    fn price_parsing_rejects_garbage() {
        assert_eq!(parse_price(" 200000 ").expect("price"), 200_000.0);
        assert_eq!(parse_price("1234.5").expect("price"), 1_234.5);
        assert!(parse_price("n/a").is_err());
    }

    #[test]
    fn unix_seconds_round_trip_through_datetime() {
        let time = parse_month("February-17").expect("parse");
        let seconds = datetime_to_unix_seconds(time);
        assert_eq!(unix_seconds_to_datetime(seconds), Some(time));
        assert_eq!(unix_seconds_to_datetime(f64::NAN), None);
    }
}
