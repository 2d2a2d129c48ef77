use std::collections::BTreeSet;
use std::fmt::{self, Write};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};
use thiserror::Error;

use crate::time::rangeofdates::RangeOfDates;
use crate::time::utility::{
    is_end_of_month,
    is_start_of_month
};

/// Short month name and zero padded day, e.g. `Nov 01`.
pub const DEFAULT_DATE_FORMAT: &str = "%b %d";
/// Full month name and year, e.g. `November 2023`.
pub const DEFAULT_MONTH_FORMAT: &str = "%B %Y";
pub const DEFAULT_SEPARATOR: &str = " - ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFormatError {
    #[error("'{0}' is not a valid date format")]
    Invalid(String),
    #[error("unknown collapse unit '{0}', expected 'day' or 'month'")]
    UnknownUnit(String)
}

/// A chrono strftime pattern that only uses date fields.
///
/// Checked once in [`DateFormat::parse`], so rendering a valid date never fails.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateFormat(String);

impl DateFormat {
    pub fn parse(pattern: &str) -> Result<DateFormat, DateFormatError> {
        let mut sample = String::new();
        write!(sample, "{}", NaiveDate::MIN.format(pattern))
            .map_err(|_| DateFormatError::Invalid(pattern.to_owned()))?;
        Ok(DateFormat(pattern.to_owned()))
    }

    pub fn pattern(&self) -> &str {
        &self.0
    }

    pub fn render(&self, d: NaiveDate) -> String {
        let mut rendered = String::new();
        // cannot fail once `parse` accepted the pattern
        let _ = write!(rendered, "{}", d.format(&self.0));
        rendered
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        DateFormat(DEFAULT_DATE_FORMAT.to_owned())
    }
}

impl TryFrom<String> for DateFormat {
    type Error = DateFormatError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        DateFormat::parse(&pattern)
    }
}

impl From<DateFormat> for String {
    fn from(format: DateFormat) -> Self {
        format.0
    }
}

impl FromStr for DateFormat {
    type Err = DateFormatError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        DateFormat::parse(pattern)
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollapseUnit {
    Day,
    Month
}

impl FromStr for CollapseUnit {
    type Err = DateFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(CollapseUnit::Day),
            "month" => Ok(CollapseUnit::Month),
            _ => Err(DateFormatError::UnknownUnit(s.to_owned()))
        }
    }
}

impl fmt::Display for CollapseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollapseUnit::Day => f.write_str("day"),
            CollapseUnit::Month => f.write_str("month")
        }
    }
}

/// Per-unit formats used when a range collapses. A missing or empty entry
/// falls back to the generic format of the policy.
#[derive(Debug, PartialEq, Eq, Clone, Default, Serialize, Deserialize)]
pub struct CombinedFormats {
    #[serde(default)]
    pub day: Option<DateFormat>,
    #[serde(default)]
    pub month: Option<DateFormat>
}

impl CombinedFormats {
    pub fn get(&self, unit: CollapseUnit) -> Option<&DateFormat> {
        let format = match unit {
            CollapseUnit::Day => self.day.as_ref(),
            CollapseUnit::Month => self.month.as_ref()
        };
        format.filter(|f| !f.pattern().is_empty())
    }
}

/// How [`format_date_range`] renders a range.
///
/// `combine` units collapse only when the range boundaries line up with the
/// unit, `force_combine` units collapse unconditionally. Day is checked
/// before month.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapsePolicy {
    format: DateFormat,
    combine: BTreeSet<CollapseUnit>,
    force_combine: BTreeSet<CollapseUnit>,
    combined_formats: CombinedFormats,
    separator: String
}

impl Default for CollapsePolicy {
    fn default() -> Self {
        CollapsePolicy {
            format: DateFormat::default(),
            combine: BTreeSet::from([CollapseUnit::Day, CollapseUnit::Month]),
            force_combine: BTreeSet::new(),
            combined_formats: CombinedFormats {
                day: Some(DateFormat(DEFAULT_DATE_FORMAT.to_owned())),
                month: Some(DateFormat(DEFAULT_MONTH_FORMAT.to_owned()))
            },
            separator: DEFAULT_SEPARATOR.to_owned()
        }
    }
}

impl CollapsePolicy {
    pub fn with_format(mut self, format: DateFormat) -> CollapsePolicy {
        self.format = format;
        self
    }

    pub fn with_combine<I>(mut self, units: I) -> CollapsePolicy
    where I: IntoIterator<Item = CollapseUnit> {
        self.combine = units.into_iter().collect();
        self
    }

    pub fn with_force_combine<I>(mut self, units: I) -> CollapsePolicy
    where I: IntoIterator<Item = CollapseUnit> {
        self.force_combine = units.into_iter().collect();
        self
    }

    pub fn with_day_format(mut self, format: Option<DateFormat>) -> CollapsePolicy {
        self.combined_formats.day = format;
        self
    }

    pub fn with_month_format(mut self, format: Option<DateFormat>) -> CollapsePolicy {
        self.combined_formats.month = format;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> CollapsePolicy {
        self.separator = separator.into();
        self
    }

    pub fn format(&self) -> &DateFormat {
        &self.format
    }

    pub fn combine(&self) -> &BTreeSet<CollapseUnit> {
        &self.combine
    }

    pub fn force_combine(&self) -> &BTreeSet<CollapseUnit> {
        &self.force_combine
    }

    pub fn combined_formats(&self) -> &CombinedFormats {
        &self.combined_formats
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    fn combined_format(&self, unit: CollapseUnit) -> &DateFormat {
        self.combined_formats.get(unit).unwrap_or(&self.format)
    }

    fn collapses(&self, unit: CollapseUnit, aligned: impl FnOnce() -> bool) -> bool {
        self.force_combine.contains(&unit) || (self.combine.contains(&unit) && aligned())
    }
}

fn is_whole_months(range: &RangeOfDates) -> bool {
    is_start_of_month(range.start_date()) && is_end_of_month(range.end_date())
}

/// Human readable label for `range`.
///
/// Rules, first match wins:
/// 1. day collapse: forced, or enabled and both ends are the same day
/// 2. month collapse: forced, or enabled and the range starts on the first
///    day of a month and ends on the last day of a month (not necessarily
///    the same month)
/// 3. `start` + separator + `end`, both in the generic format
///
/// Collapsed labels render the start date only.
pub fn format_date_range(range: &RangeOfDates, policy: &CollapsePolicy) -> String {
    let start_date = range.start_date();
    let end_date = range.end_date();

    if policy.collapses(CollapseUnit::Day, || start_date == end_date) {
        return policy.combined_format(CollapseUnit::Day).render(start_date);
    }

    if policy.collapses(CollapseUnit::Month, || is_whole_months(range)) {
        return policy.combined_format(CollapseUnit::Month).render(start_date);
    }

    let mut label = policy.format.render(start_date);
    label.push_str(&policy.separator);
    label.push_str(&policy.format.render(end_date));
    label
}
