use chrono::NaiveDate;
use serde::{
    Deserialize,
    Serialize
};

/// A dated public holiday. Identity for membership purposes is the date alone.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Holiday {
    date: NaiveDate,
    name: String
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>) -> Holiday {
        Holiday { date, name: name.into() }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
