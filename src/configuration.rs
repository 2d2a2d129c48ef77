use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::feed::holidayfeedmanager::HolidayFeedManager;
use crate::feed::holidaysource::HolidayFeed;
use crate::manager::manager::Manager;
use crate::manager::managererror::ManagerError;
use crate::time::daterangeformatter::CollapsePolicy;
use crate::time::weekday::BusinessDaySet;

#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    holiday_feeds: Vec<serde_json::Value>,
    #[serde(default)]
    business_days: Option<BusinessDaySet>,
    #[serde(default)]
    range_format: Option<CollapsePolicy>
}

/// Settings shared by the command line tools: named holiday feeds, the
/// business week and the range label policy.
pub struct Configuration {
    holiday_feed_manager: Manager<HolidayFeed>,
    business_days: BusinessDaySet,
    range_format: CollapsePolicy
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new()
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            holiday_feed_manager: HolidayFeedManager::new(),
            business_days: BusinessDaySet::default(),
            range_format: CollapsePolicy::default()
        }
    }

    pub fn holiday_feed_manager(&self) -> &Manager<HolidayFeed> {
        &self.holiday_feed_manager
    }

    pub fn business_days(&self) -> BusinessDaySet {
        self.business_days
    }

    pub fn range_format(&self) -> &CollapsePolicy {
        &self.range_format
    }

    pub fn from_json(json_value: serde_json::Value) -> Result<Configuration, ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_value(json_value)?;
        Configuration::from_json_prop(json_prop)
    }

    pub fn from_reader(file_path: &Path) -> Result<Configuration, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        let configuration = Configuration::from_json_prop(json_prop)?;
        info!(
            path = %file_path.display(),
            feeds = configuration.holiday_feed_manager.len(),
            "configuration loaded"
        );
        Ok(configuration)
    }

    fn from_json_prop(json_prop: ConfigurationJsonProp) -> Result<Configuration, ManagerError> {
        let mut configuration = Configuration::new();
        configuration.holiday_feed_manager.insert_obj_from_json_vec(&json_prop.holiday_feeds)?;
        if let Some(business_days) = json_prop.business_days {
            configuration.business_days = business_days;
        }
        if let Some(range_format) = json_prop.range_format {
            configuration.range_format = range_format;
        }
        Ok(configuration)
    }
}
