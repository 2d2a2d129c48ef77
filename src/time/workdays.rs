use std::convert::Infallible;

use chrono::NaiveDate;

use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::rangeofdates::RangeOfDates;
use crate::time::weekday::{
    BusinessDaySet,
    is_business_day
};

/// Work days of `range` in ascending order.
///
/// Every day of the range is visited exactly once and `is_holiday` is called
/// once per visited day, holiday or not. A day is kept when it is not a
/// holiday and its week day belongs to `business_days`. The first error
/// returned by `is_holiday` stops the walk and is returned as is.
pub fn try_work_days<F, E>(range: &RangeOfDates,
                           business_days: &BusinessDaySet,
                           mut is_holiday: F) -> Result<Vec<NaiveDate>, E>
where F: FnMut(NaiveDate) -> Result<bool, E> {
    let mut work_days = Vec::with_capacity(range.len());
    for d in range.iter() {
        if is_holiday(d)? {
            continue;
        }
        if is_business_day(business_days, d) {
            work_days.push(d);
        }
    }
    Ok(work_days)
}

pub fn work_days<F>(range: &RangeOfDates,
                    business_days: &BusinessDaySet,
                    mut is_holiday: F) -> Vec<NaiveDate>
where F: FnMut(NaiveDate) -> bool {
    let result: Result<Vec<NaiveDate>, Infallible> =
        try_work_days(range, business_days, |d| Ok(is_holiday(d)));
    match result {
        Ok(work_days) => work_days,
        Err(never) => match never {}
    }
}

pub fn work_days_in_calendar(range: &RangeOfDates,
                             business_days: &BusinessDaySet,
                             calendar: &dyn HolidayCalendar) -> Vec<NaiveDate> {
    work_days(range, business_days, |d| calendar.is_holiday(d))
}
