//! Calendar behaviour in the reference configuration (`Asia/Tokyo`, `ja`,
//! Japanese national holidays).
//!
//! Every navigation test also checks that the receiver keeps its instant.

use chrono::{Duration, Utc};
use koyomi_core::Error;
use koyomi_time::Calendar;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn cal(s: &str) -> Calendar {
    Calendar::new(s).unwrap()
}

// ─── Construction ─────────────────────────────────────────────────────────────

#[test]
fn test_now_without_arguments() {
    let before = Utc::now() - Duration::seconds(1);
    let calendar = Calendar::now();
    let after = Utc::now() + Duration::seconds(1);

    assert!(calendar.datetime() >= before && calendar.datetime() <= after);
    assert!(calendar.format().ends_with("+09:00"));
}

#[test]
fn test_new_from_string() {
    let expected = "2016-01-01T09:10:00+09:00";
    assert_eq!(cal(expected).format(), expected);
}

#[test]
fn test_new_with_format() {
    let calendar = Calendar::with_format("2016/01/01", "%Y/%m/%d").unwrap();
    assert_eq!(calendar.format(), "2016-01-01T00:00:00+09:00");
}

#[test]
fn test_new_from_other_offset_is_normalized() {
    let calendar = cal("2016-01-01T00:10:00Z");
    assert_eq!(calendar.format(), "2016-01-01T09:10:00+09:00");
}

#[test]
fn test_from_str() {
    let calendar: Calendar = "2016-01-01T09:10:00+09:00".parse().unwrap();
    assert_eq!(calendar.to_string(), "2016-01-01T09:10:00+09:00");
}

#[test]
fn test_unparseable_input_fails() {
    assert_eq!(
        Calendar::new("yesterday-ish").unwrap_err(),
        Error::Parse {
            input: "yesterday-ish".into(),
            format: None,
        }
    );
    assert!(matches!(
        Calendar::with_format("2016-01-01", "%Y/%m/%d"),
        Err(Error::Parse { format: Some(_), .. })
    ));
}

// ─── Formatting ───────────────────────────────────────────────────────────────

#[test]
fn test_format_with_pattern() {
    let calendar = cal("2016-01-01T09:10:00+09:00");
    assert_eq!(calendar.format_with("%Y/%m/%d %H:%M").unwrap(), "2016/01/01 09:10");
    assert_eq!(calendar.format(), "2016-01-01T09:10:00+09:00");
}

// ─── Navigation ───────────────────────────────────────────────────────────────

#[test]
fn test_today_is_midnight() {
    let now = "2016-01-01T08:15:45+09:00";
    let calendar = cal(now);

    assert_eq!(calendar.today().format(), "2016-01-01T00:00:00+09:00");
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_tomorrow_is_next_midnight() {
    let now = "2016-01-01T08:15:45+09:00";
    let calendar = cal(now);

    assert_eq!(
        calendar.tomorrow().unwrap().format(),
        "2016-01-02T00:00:00+09:00"
    );
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_yesterday_is_previous_midnight() {
    let now = "2016-01-02T08:15:45+09:00";
    let calendar = cal(now);

    assert_eq!(
        calendar.yesterday().unwrap().format(),
        "2016-01-01T00:00:00+09:00"
    );
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_day_of_week() {
    let expected = [
        ("2016-02-01T00:00:00+09:00", "月"),
        ("2016-02-02T00:00:00+09:00", "火"),
        ("2016-02-03T00:00:00+09:00", "水"),
        ("2016-02-04T00:00:00+09:00", "木"),
        ("2016-02-05T00:00:00+09:00", "金"),
        ("2016-02-06T00:00:00+09:00", "土"),
        ("2016-02-07T00:00:00+09:00", "日"),
    ];
    for (date, name) in expected {
        assert_eq!(cal(date).day_of_week(), name, "{date}");
    }
}

#[test]
fn test_day_of_week_uses_local_day() {
    // 2016-02-07T20:00Z is already Monday in Tokyo.
    assert_eq!(cal("2016-02-07T20:00:00Z").day_of_week(), "月");
}

#[test]
fn test_start_of_month() {
    let now = "2016-01-15T09:05:12+09:00";
    let calendar = cal(now);

    assert_eq!(
        calendar.start_of_month().format(),
        "2016-01-01T00:00:00+09:00"
    );
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_end_of_month() {
    let now = "2016-01-15T09:05:12+09:00";
    let calendar = cal(now);

    assert_eq!(calendar.end_of_month().format(), "2016-01-31T23:59:59+09:00");
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_end_of_month_february_leap_year() {
    assert_eq!(
        cal("2016-02-10T12:00:00+09:00").end_of_month().format(),
        "2016-02-29T23:59:59+09:00"
    );
}

#[test]
fn test_next_holiday() {
    init_tracing();
    let previous_saturday = "2016-01-16T00:00:00+09:00";
    let now = "2016-01-17T09:05:12+09:00";
    let tomorrow = "2016-01-18T00:00:00+09:00";
    let next_saturday = "2016-01-23T00:00:00+09:00";
    let calendar = cal(now);
    let next_holiday = calendar.next_holiday().unwrap().format();

    assert_eq!(next_holiday, next_saturday);
    assert_ne!(next_holiday, now);
    assert_ne!(next_holiday, tomorrow);
    assert_ne!(next_holiday, previous_saturday);
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_previous_holiday() {
    init_tracing();
    let sunday = "2016-01-17T00:00:00+09:00";
    let yesterday = "2016-01-18T00:00:00+09:00";
    let now = "2016-01-19T09:05:12+09:00";
    let saturday = "2016-01-23T00:00:00+09:00";
    let calendar = cal(now);
    let previous_holiday = calendar.previous_holiday().unwrap().format();

    assert_eq!(previous_holiday, sunday);
    assert_ne!(previous_holiday, now);
    assert_ne!(previous_holiday, yesterday);
    assert_ne!(previous_holiday, saturday);
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_next_weekday() {
    init_tracing();
    let friday = "2016-01-15T00:00:00+09:00";
    let now = "2016-01-16T09:05:12+09:00";
    let tomorrow = "2016-01-17T00:00:00+09:00";
    let monday = "2016-01-18T00:00:00+09:00";
    let calendar = cal(now);
    let next_weekday = calendar.next_weekday().unwrap().format();

    assert_eq!(next_weekday, monday);
    assert_ne!(next_weekday, now);
    assert_ne!(next_weekday, tomorrow);
    assert_ne!(next_weekday, friday);
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_previous_weekday() {
    init_tracing();
    let friday = "2016-01-15T00:00:00+09:00";
    let yesterday = "2016-01-16T00:00:00+09:00";
    let now = "2016-01-17T09:05:12+09:00";
    let monday = "2016-01-18T00:00:00+09:00";
    let calendar = cal(now);
    let previous_weekday = calendar.previous_weekday().unwrap().format();

    assert_eq!(previous_weekday, friday);
    assert_ne!(previous_weekday, now);
    assert_ne!(previous_weekday, yesterday);
    assert_ne!(previous_weekday, monday);
    assert_eq!(calendar.format(), now, "receiver must keep its instant");
}

#[test]
fn test_next_weekday_skips_designated_holidays() {
    // Saturday 2016-01-09, Sunday 10th, Coming of Age Day Monday 11th.
    let calendar = cal("2016-01-08T18:00:00+09:00");
    assert_eq!(
        calendar.next_weekday().unwrap().format(),
        "2016-01-12T00:00:00+09:00"
    );
}

#[test]
fn test_next_weekday_across_golden_week() {
    // 2019-04-27 (Sat) through 2019-05-06 (Mon) were all holidays.
    let calendar = cal("2019-04-26T10:00:00+09:00");
    assert_eq!(
        calendar.next_weekday().unwrap().format(),
        "2019-05-07T00:00:00+09:00"
    );
    assert_eq!(
        cal("2019-05-07T10:00:00+09:00")
            .previous_weekday()
            .unwrap()
            .format(),
        "2019-04-26T00:00:00+09:00"
    );
}

// ─── Classification ───────────────────────────────────────────────────────────

#[test]
fn test_is_start_of_month() {
    let start = cal("2016-01-01T00:00:00+09:00");
    let end = cal("2016-01-31T23:59:59+09:00");

    assert!(start.is_start_of_month());
    assert!(!end.is_start_of_month(), "end of month is not start of month");
}

#[test]
fn test_is_end_of_month() {
    let start = cal("2016-01-01T00:00:00+09:00");
    let end = cal("2016-01-31T23:59:59+09:00");

    assert!(end.is_end_of_month());
    assert!(!start.is_end_of_month(), "start of month is not end of month");
    assert!(cal("2016-01-31T00:00:00+09:00").is_end_of_month());
    assert!(!cal("2016-01-30T23:59:59+09:00").is_end_of_month());
}

#[test]
fn test_is_holiday() {
    let saturday = cal("2016-01-02T09:00:00+09:00");
    let sunday = cal("2016-01-03T09:00:00+09:00");
    let holiday = cal("2016-01-11T09:00:00+09:00");
    let weekday = cal("2016-01-04T09:00:00+09:00");

    assert!(saturday.is_holiday());
    assert!(sunday.is_holiday());
    assert!(holiday.is_holiday());
    assert!(!weekday.is_holiday());
}

#[test]
fn test_is_weekday() {
    let saturday = cal("2016-01-02T09:00:00+09:00");
    let sunday = cal("2016-01-03T09:00:00+09:00");
    let holiday = cal("2016-01-11T09:00:00+09:00");
    let weekday = cal("2016-01-04T09:00:00+09:00");

    assert!(weekday.is_weekday());
    assert!(!saturday.is_weekday());
    assert!(!sunday.is_weekday());
    assert!(!holiday.is_weekday());
}

#[test]
fn test_holidays_across_covered_years() {
    // 2040-01-02 (Monday) is the substitute for New Year's Day on a Sunday.
    assert!(cal("2040-01-02T12:00:00+09:00").is_holiday());
    // 2031-01-01 is a Wednesday.
    assert!(cal("2031-01-01T12:00:00+09:00").is_holiday());
    assert_eq!(
        cal("2030-12-31T12:00:00+09:00").next_weekday().unwrap().format(),
        "2031-01-02T00:00:00+09:00"
    );
}

#[test]
fn test_outside_holiday_coverage_only_weekends() {
    // 2053-01-01 is a Wednesday and 2053-01-04 a Saturday, both past the
    // last covered year.
    assert!(cal("2053-01-01T12:00:00+09:00").is_weekday());
    assert!(cal("2053-01-04T12:00:00+09:00").is_holiday());
    assert!(cal("1999-01-15T12:00:00+09:00").is_weekday());
}
