use chrono::{
    Datelike,
    NaiveDate,
    Weekday
};
use serde::{
    Deserialize,
    Serialize
};

/// Day of week numbered from Sunday: 0 = Sunday, 1 = Monday, ..., 6 = Saturday.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekDay(u8);

impl WeekDay {
    pub const SUNDAY: WeekDay = WeekDay(0);
    pub const MONDAY: WeekDay = WeekDay(1);
    pub const TUESDAY: WeekDay = WeekDay(2);
    pub const WEDNESDAY: WeekDay = WeekDay(3);
    pub const THURSDAY: WeekDay = WeekDay(4);
    pub const FRIDAY: WeekDay = WeekDay(5);
    pub const SATURDAY: WeekDay = WeekDay(6);

    pub const fn new(number: u8) -> Option<WeekDay> {
        if number < 7 {
            Some(WeekDay(number))
        } else {
            None
        }
    }

    pub fn of(d: NaiveDate) -> WeekDay {
        WeekDay::from(d.weekday())
    }

    pub const fn number(&self) -> u8 {
        self.0
    }
}

impl From<Weekday> for WeekDay {
    fn from(weekday: Weekday) -> Self {
        WeekDay(weekday.num_days_from_sunday() as u8)
    }
}

impl From<WeekDay> for Weekday {
    fn from(weekday: WeekDay) -> Self {
        match weekday.0 {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat
        }
    }
}

impl From<WeekDay> for u8 {
    fn from(weekday: WeekDay) -> Self {
        weekday.0
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("week day number {0} is outside 0 (Sunday) ..= 6 (Saturday)")]
pub struct WeekDayOutOfRange(pub u8);

impl TryFrom<u8> for WeekDay {
    type Error = WeekDayOutOfRange;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        WeekDay::new(number).ok_or(WeekDayOutOfRange(number))
    }
}

/// Set of week days eligible as business days.
/// Each bit represents a day: Sun(0), Mon(1), ..., Sat(6)
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "Vec<WeekDay>", into = "Vec<WeekDay>")]
pub struct BusinessDaySet(u8);

impl BusinessDaySet {
    pub const fn empty() -> BusinessDaySet {
        BusinessDaySet(0)
    }

    pub fn new<I>(weekdays: I) -> BusinessDaySet
    where I: IntoIterator<Item = WeekDay> {
        let mut mask = 0u8;
        for weekday in weekdays {
            mask |= 1u8 << weekday.number();
        }
        BusinessDaySet(mask)
    }

    #[inline]
    pub fn contains(&self, weekday: WeekDay) -> bool {
        let bit = 1u8 << weekday.number();
        (self.0 & bit) != 0
    }

    /// Members in ascending order, Sunday first.
    pub fn weekdays(&self) -> Vec<WeekDay> {
        let mut weekdays = Vec::with_capacity(7);
        for day in 0..7 {
            if (self.0 & (1u8 << day)) != 0 {
                weekdays.push(WeekDay(day));
            }
        }
        weekdays
    }
}

/// Monday through Friday.
impl Default for BusinessDaySet {
    fn default() -> Self {
        BusinessDaySet::new([
            WeekDay::MONDAY,
            WeekDay::TUESDAY,
            WeekDay::WEDNESDAY,
            WeekDay::THURSDAY,
            WeekDay::FRIDAY
        ])
    }
}

impl From<Vec<WeekDay>> for BusinessDaySet {
    fn from(weekdays: Vec<WeekDay>) -> Self {
        BusinessDaySet::new(weekdays)
    }
}

impl From<BusinessDaySet> for Vec<WeekDay> {
    fn from(set: BusinessDaySet) -> Self {
        set.weekdays()
    }
}

impl FromIterator<WeekDay> for BusinessDaySet {
    fn from_iter<I: IntoIterator<Item = WeekDay>>(iter: I) -> Self {
        BusinessDaySet::new(iter)
    }
}

#[inline]
pub fn is_business_day(business_days: &BusinessDaySet, d: NaiveDate) -> bool {
    business_days.contains(WeekDay::of(d))
}
