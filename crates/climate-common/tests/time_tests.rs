//! Tests for observation date parsing and range validation.

use climate_common::time::{DateRange, ObservationDate, TimeParseError};
use climate_common::ClimateError;

// ============================================================================
// ObservationDate parsing
// ============================================================================

#[test]
fn test_parse_trims_whitespace() {
    let date = ObservationDate::parse(" 2016-08-23 ").unwrap();
    assert_eq!(date.to_db_string(), "2016-08-23");
}

#[test]
fn test_parse_invalid_calendar_day() {
    let err = ObservationDate::parse("2017-02-30").unwrap_err();
    assert_eq!(err, TimeParseError::InvalidFormat("2017-02-30".to_string()));
}

#[test]
fn test_parse_garbage() {
    assert!(ObservationDate::parse("yesterday").is_err());
    assert!(ObservationDate::parse("").is_err());
    assert!(ObservationDate::parse("2017/08/23").is_err());
    assert!(ObservationDate::parse("2017-08-23T00:00:00").is_err());
}

#[test]
fn test_from_str() {
    let date: ObservationDate = "2012-02-29".parse().unwrap();
    assert_eq!(date, ObservationDate::from_ymd(2012, 2, 29).unwrap());
}

#[test]
fn test_ordering_matches_storage_strings() {
    let a = ObservationDate::parse("2016-09-30").unwrap();
    let b = ObservationDate::parse("2016-10-01").unwrap();
    assert!(a < b);
    assert!(a.to_db_string() < b.to_db_string());
}

// ============================================================================
// DateRange
// ============================================================================

#[test]
fn test_range_open_ended() {
    let range = DateRange::parse("2017-01-01", None).unwrap();
    assert!(range.end.is_none());
    assert!(range.contains(&ObservationDate::parse("2030-01-01").unwrap()));
    assert!(!range.contains(&ObservationDate::parse("2016-12-31").unwrap()));
}

#[test]
fn test_range_inclusive_bounds() {
    let range = DateRange::parse("2017-01-01", Some("2017-01-31")).unwrap();
    assert!(range.contains(&range.start));
    assert!(range.contains(&ObservationDate::parse("2017-01-31").unwrap()));
    assert!(!range.contains(&ObservationDate::parse("2017-02-01").unwrap()));
}

#[test]
fn test_range_single_day() {
    let range = DateRange::parse("2017-05-05", Some("2017-05-05")).unwrap();
    assert_eq!(Some(range.start), range.end);
}

#[test]
fn test_range_inverted_rejected() {
    let err = DateRange::parse("2017-02-01", Some("2017-01-01")).unwrap_err();
    assert!(matches!(err, ClimateError::InvalidRange(_)));
    assert_eq!(err.http_status_code(), 400);
}

#[test]
fn test_range_bad_end_date() {
    let err = DateRange::parse("2017-01-01", Some("soon")).unwrap_err();
    assert!(matches!(err, ClimateError::InvalidDate(_)));
}

#[test]
fn test_since() {
    let start = ObservationDate::parse("2015-06-01").unwrap();
    assert_eq!(DateRange::since(start), DateRange::new(start, None).unwrap());
}
