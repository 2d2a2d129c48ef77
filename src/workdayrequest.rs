use chrono::NaiveDate;
use tracing::{
    debug,
    info
};

use crate::feed::feederror::FeedError;
use crate::feed::holidaysource::HolidaySource;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaylistcalendar::HolidayListCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::weekday::BusinessDaySet;
use crate::time::workdays::work_days_in_calendar;

/// Parameters of a work day query against a holiday feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDayRequest {
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    business_days: Option<BusinessDaySet>
}

impl WorkDayRequest {
    /// Starting date for the period, inclusive.
    pub fn new(start_date: NaiveDate) -> WorkDayRequest {
        WorkDayRequest {
            start_date,
            end_date: None,
            business_days: None
        }
    }

    /// Ending date for the period, inclusive. Without it the period ends on
    /// the last day of the start date's month.
    pub fn with_end_date(mut self, end_date: Option<NaiveDate>) -> WorkDayRequest {
        self.end_date = end_date;
        self
    }

    /// Week days treated as business days, Monday to Friday when not given.
    pub fn with_business_days(mut self, business_days: Option<BusinessDaySet>) -> WorkDayRequest {
        self.business_days = business_days;
        self
    }

    pub fn range(&self) -> RangeOfDates {
        match self.end_date {
            Some(end_date) => RangeOfDates::new(self.start_date, end_date),
            None => RangeOfDates::to_end_of_month(self.start_date)
        }
    }

    pub fn business_days(&self) -> BusinessDaySet {
        self.business_days.unwrap_or_default()
    }
}

/// Work days of the requested period, skipping the holidays of `source`.
///
/// The feed is fetched once per call. A feed failure fails the whole call.
pub async fn get_work_days_for_date_range<S>(source: &S,
                                             request: &WorkDayRequest) -> Result<Vec<NaiveDate>, FeedError>
where S: HolidaySource {
    let holidays = source.fetch_holidays().await?;
    let calendar = HolidayListCalendar::new(holidays);
    let range = request.range();
    for date in calendar.holidays_between(&range) {
        debug!(%date, name = calendar.holiday_name(date).unwrap_or_default(), "holiday in range");
    }
    let work_days = work_days_in_calendar(&range, &request.business_days(), &calendar);
    info!(
        start = %range.start_date(),
        end = %range.end_date(),
        holidays = calendar.len(),
        work_days = work_days.len(),
        "work days computed"
    );
    Ok(work_days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::holidaysource::StaticHolidaySource;
    use crate::time::calendar::holiday::Holiday;
    use crate::time::weekday::WeekDay;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn end_date_defaults_to_end_of_month() {
        let request = WorkDayRequest::new(ymd(2024, 2, 10));
        assert_eq!(request.range(), RangeOfDates::new(ymd(2024, 2, 10), ymd(2024, 2, 29)));
        assert_eq!(request.business_days(), BusinessDaySet::default());
    }

    #[tokio::test]
    async fn holidays_from_source_are_skipped() {
        let source = StaticHolidaySource::new(vec![Holiday::new(ymd(2023, 11, 17), "Holiday")]);
        let request = WorkDayRequest::new(ymd(2023, 11, 13))
            .with_end_date(Some(ymd(2023, 11, 19)))
            .with_business_days(Some(BusinessDaySet::new([WeekDay::FRIDAY, WeekDay::SATURDAY])));
        let work_days = get_work_days_for_date_range(&source, &request).await.unwrap();
        assert_eq!(work_days, vec![ymd(2023, 11, 18)]);
    }
}
