use chrono::NaiveDate;
use ical::IcalParser;
use ical::parser::ical::component::IcalEvent;
use tracing::debug;

use crate::feed::feederror::FeedError;
use crate::feed::holidayclassifier::{
    FeedEvent,
    HolidayClassifier
};
use crate::time::calendar::holiday::Holiday;

fn property<'a>(event: &'a IcalEvent, name: &str) -> Option<&'a str> {
    event.properties
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .and_then(|p| p.value.as_deref())
}

/// `DTSTART` is either a date (`20231101`) or a date-time
/// (`20231101T000000Z`); only the calendar day is kept.
fn parse_ical_date(value: &str) -> Result<NaiveDate, FeedError> {
    value.get(..8)
        .and_then(|ymd| NaiveDate::parse_from_str(ymd, "%Y%m%d").ok())
        .ok_or_else(|| FeedError::InvalidDate(value.to_owned()))
}

/// Extracts the public holidays of an iCalendar document.
///
/// Only `VEVENT` components are considered, and only those accepted by
/// `classifier` become holidays: start date from `DTSTART`, name from
/// `SUMMARY`. Holidays keep the order of the document.
pub fn parse_ical_holidays(ics: &str,
                           classifier: &dyn HolidayClassifier) -> Result<Vec<Holiday>, FeedError> {
    let mut holidays: Vec<Holiday> = Vec::new();
    let mut skipped = 0usize;
    for calendar in IcalParser::new(ics.as_bytes()) {
        let calendar = calendar?;
        for event in calendar.events.iter() {
            let summary = property(event, "SUMMARY");
            let feed_event = FeedEvent {
                summary,
                description: property(event, "DESCRIPTION")
            };
            if !classifier.is_public_holiday(&feed_event) {
                skipped += 1;
                continue;
            }
            let start = property(event, "DTSTART")
                .ok_or_else(|| FeedError::MissingStart(summary.unwrap_or_default().to_owned()))?;
            holidays.push(Holiday::new(parse_ical_date(start)?, summary.unwrap_or_default()));
        }
    }
    debug!(holidays = holidays.len(), skipped, "parsed iCalendar feed");
    Ok(holidays)
}
