use chrono::NaiveDate;

use crate::time::rangeofdates::RangeOfDates;

/// Read-only holiday lookup.
///
/// `Send + Sync` so that `dyn HolidayCalendar` can be shared behind `Arc`.
pub trait HolidayCalendar: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> bool;

    fn holiday_name(&self, d: NaiveDate) -> Option<&str>;

    fn holidays_between(&self, range: &RangeOfDates) -> Vec<NaiveDate> {
        range.iter().filter(|d| self.is_holiday(*d)).collect()
    }
}
