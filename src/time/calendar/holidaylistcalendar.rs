use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use crate::time::calendar::holiday::Holiday;
use crate::time::calendar::holidaycalendar::HolidayCalendar;

/// Holiday calendar backed by an explicit list of dated holidays, typically
/// the result of one feed fetch.
pub struct HolidayListCalendar {
    holidays: HashMap<NaiveDate, String>
}

impl HolidayListCalendar {
    /// Creates a calendar from the given holidays (takes ownership).
    ///
    /// When several holidays share a date the first name is kept.
    pub fn new(holidays: Vec<Holiday>) -> HolidayListCalendar {
        let mut map: HashMap<NaiveDate, String> = HashMap::with_capacity(holidays.len());
        for holiday in holidays {
            let date = holiday.date();
            if map.contains_key(&date) {
                debug!(%date, name = holiday.name(), "duplicate holiday date ignored");
                continue;
            }
            map.insert(date, holiday.name().to_owned());
        }
        HolidayListCalendar { holidays: map }
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl FromIterator<Holiday> for HolidayListCalendar {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        HolidayListCalendar::new(iter.into_iter().collect())
    }
}

impl HolidayCalendar for HolidayListCalendar {
    #[inline]
    fn is_holiday(&self, d: NaiveDate) -> bool {
        self.holidays.contains_key(&d)
    }

    fn holiday_name(&self, d: NaiveDate) -> Option<&str> {
        self.holidays.get(&d).map(|name| name.as_str())
    }
}
