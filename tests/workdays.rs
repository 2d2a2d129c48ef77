//! Work day queries against the bundled Slovak holiday feed.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;

use workcal::feed::feederror::FeedError;
use workcal::feed::holidayclassifier::FeedEvent;
use workcal::feed::holidaysource::{
    HolidaySource,
    IcalFileSource
};
use workcal::time::weekday::{
    BusinessDaySet,
    WeekDay
};
use workcal::workdayrequest::{
    WorkDayRequest,
    get_work_days_for_date_range
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn slovak_feed() -> IcalFileSource {
    IcalFileSource::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/slovakia_2023.ics"))
}

#[tokio::test]
async fn november_2023_defaults() {
    let request = WorkDayRequest::new(ymd(2023, 11, 1));
    let work_days = get_work_days_for_date_range(&slovak_feed(), &request).await.unwrap();

    let expected: Vec<NaiveDate> = [
        2, 3, 6, 7, 8, 9, 10, 13, 14, 15, 16, 20, 21, 22, 23, 24, 27, 28, 29, 30
    ].iter().map(|d| ymd(2023, 11, *d)).collect();
    assert_eq!(work_days, expected);
}

#[tokio::test]
async fn observances_are_not_holidays() {
    // All Souls' Day (Nov 2) is only an observance
    let request = WorkDayRequest::new(ymd(2023, 11, 1)).with_end_date(Some(ymd(2023, 11, 2)));
    let work_days = get_work_days_for_date_range(&slovak_feed(), &request).await.unwrap();
    assert_eq!(work_days, vec![ymd(2023, 11, 2)]);
}

#[tokio::test]
async fn holidays_on_any_business_week() {
    // Dec 24 is a Sunday holiday, so a Sunday-only week has no work day left in that range
    let request = WorkDayRequest::new(ymd(2023, 12, 17))
        .with_end_date(Some(ymd(2023, 12, 31)))
        .with_business_days(Some(BusinessDaySet::new([WeekDay::SUNDAY])));
    let work_days = get_work_days_for_date_range(&slovak_feed(), &request).await.unwrap();
    assert_eq!(work_days, vec![ymd(2023, 12, 17), ymd(2023, 12, 31)]);
}

#[tokio::test]
async fn range_across_years_and_months() {
    let request = WorkDayRequest::new(ymd(2022, 12, 29)).with_end_date(Some(ymd(2023, 1, 9)));
    let work_days = get_work_days_for_date_range(&slovak_feed(), &request).await.unwrap();
    assert_eq!(work_days, vec![
        ymd(2022, 12, 29),
        ymd(2022, 12, 30),
        ymd(2023, 1, 2),
        ymd(2023, 1, 3),
        ymd(2023, 1, 4),
        ymd(2023, 1, 5),
        ymd(2023, 1, 9)
    ]);
}

#[tokio::test]
async fn inverted_range_is_empty() {
    let request = WorkDayRequest::new(ymd(2023, 11, 30)).with_end_date(Some(ymd(2023, 11, 1)));
    let work_days = get_work_days_for_date_range(&slovak_feed(), &request).await.unwrap();
    assert!(work_days.is_empty());
}

#[tokio::test]
async fn custom_classifier() {
    let everything = |_: &FeedEvent<'_>| true;
    let source = slovak_feed().with_classifier(Arc::new(everything));
    let holidays = source.fetch_holidays().await.unwrap();
    assert_eq!(holidays.len(), 9);

    let request = WorkDayRequest::new(ymd(2023, 11, 1)).with_end_date(Some(ymd(2023, 11, 3)));
    let work_days = get_work_days_for_date_range(&source, &request).await.unwrap();
    assert_eq!(work_days, vec![ymd(2023, 11, 3)]);
}

#[tokio::test]
async fn missing_feed_fails_the_whole_query() {
    let source = IcalFileSource::new("tests/data/does_not_exist.ics");
    let request = WorkDayRequest::new(ymd(2023, 11, 1));
    let result = get_work_days_for_date_range(&source, &request).await;
    assert!(matches!(result, Err(FeedError::Io(_))));
}

#[tokio::test]
async fn garbage_feed_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ics");
    std::fs::write(&path, "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nDTSTART:nope\r\nDESCRIPTION:Public holiday\r\nEND:VEVENT\r\nEND:VCALENDAR\r\n").unwrap();
    let request = WorkDayRequest::new(ymd(2023, 11, 1));
    let result = get_work_days_for_date_range(&IcalFileSource::new(path), &request).await;
    assert!(matches!(result, Err(FeedError::InvalidDate(_))));
}
