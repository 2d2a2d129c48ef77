use chrono::{
    Days,
    NaiveDate
};

use crate::time::utility::end_of_month;

/// Inclusive range of calendar days.
///
/// The bounds are kept exactly as given. A range whose start is after its
/// end contains no days.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RangeOfDates {
    start_date: NaiveDate,
    end_date: NaiveDate
}

impl RangeOfDates {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> RangeOfDates {
        RangeOfDates { start_date, end_date }
    }

    /// From `start_date` to the last day of its month.
    pub fn to_end_of_month(start_date: NaiveDate) -> RangeOfDates {
        RangeOfDates::new(start_date, end_of_month(start_date))
    }

    pub fn single_day(d: NaiveDate) -> RangeOfDates {
        RangeOfDates::new(d, d)
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    pub fn len(&self) -> usize {
        if self.is_inverted() {
            0
        } else {
            ((self.end_date - self.start_date).num_days() + 1) as usize
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> RangeOfDatesIterator<'_> {
        RangeOfDatesIterator {
            range_of_dates: self,
            index: 0,
            len: self.len()
        }
    }

    pub fn to_vec(&self) -> Vec<NaiveDate> {
        self.iter().collect()
    }
}

impl<'a> IntoIterator for &'a RangeOfDates {
    type Item = NaiveDate;
    type IntoIter = RangeOfDatesIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub struct RangeOfDatesIterator<'a> {
    range_of_dates: &'a RangeOfDates,
    index: usize,
    len: usize
}

impl<'a> Iterator for RangeOfDatesIterator<'a> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index < self.len {
            let result = self.range_of_dates.start_date().checked_add_days(Days::new(self.index as u64));
            self.index += 1;
            result
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = self.len - self.index;
        (remain, Some(remain))
    }
}
