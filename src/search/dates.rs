//! Lenient mint-date parsing.
//!
//! Explorer metadata is user supplied, so a date may be a full RFC 3339 timestamp,
//! a naive timestamp, a bare calendar date, or garbage. Garbage parses to `None`
//! and is treated as older than every real date.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_minted_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
}

/// Which end of a range a bound belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateBound {
    Start,
    End,
}

/// Parses a range bound. A bare date used as an end bound covers the whole day.
pub fn parse_date_bound(raw: &str, bound: DateBound) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();

    if bound == DateBound::End {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
            let end_of_day = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?;
            return Some(date.and_time(end_of_day).and_utc());
        }
    }

    parse_minted_date(trimmed)
}
