use chrono::{
    Datelike,
    NaiveDate
};

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// Last calendar day of the month containing `d`.
pub fn end_of_month(d: NaiveDate) -> NaiveDate {
    d.with_day(days_of_month(d.year(), d.month())).unwrap_or(d)
}

#[inline]
pub fn is_start_of_month(d: NaiveDate) -> bool {
    d.day() == 1
}

#[inline]
pub fn is_end_of_month(d: NaiveDate) -> bool {
    d.day() == days_of_month(d.year(), d.month())
}
