use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::feed::holidayclassifier::DescriptionMarker;
use crate::feed::holidaysource::{
    HolidayFeed,
    IcalFileSource,
    IcalUrlSource,
    StaticHolidaySource
};
use crate::manager::manager::Manager;
use crate::manager::managererror::{
    ManagerError,
    parse_json_value
};
use crate::time::calendar::holiday::Holiday;

#[derive(Deserialize)]
enum FeedType {
    IcalUrl,
    IcalFile,
    Static
}

#[derive(Deserialize)]
struct FeedTypedObject {
    feed_type: FeedType
}

#[derive(Deserialize)]
struct IcalUrlJsonProp {
    url: String,
    #[serde(default)]
    description_marker: Option<String>
}

#[derive(Deserialize)]
struct IcalFileJsonProp {
    path: PathBuf,
    #[serde(default)]
    description_marker: Option<String>
}

#[derive(Deserialize)]
struct StaticJsonProp {
    holidays: Vec<Holiday>
}

fn marker(description_marker: Option<String>) -> Arc<DescriptionMarker> {
    Arc::new(description_marker
        .map(|m| DescriptionMarker::new(&m))
        .unwrap_or_default())
}

/// Builds a feed from a configuration entry such as
/// `{ "name": "Slovakia", "feed_type": "IcalUrl", "url": "https://..." }`.
pub fn holiday_feed_from_json(json_value: serde_json::Value) -> Result<HolidayFeed, ManagerError> {
    let typed_object: FeedTypedObject = parse_json_value(json_value.clone())?;
    match typed_object.feed_type {
        FeedType::IcalUrl => {
            let prop: IcalUrlJsonProp = parse_json_value(json_value)?;
            let source = IcalUrlSource::new(prop.url)
                .with_classifier(marker(prop.description_marker));
            Ok(HolidayFeed::IcalUrl(source))
        },
        FeedType::IcalFile => {
            let prop: IcalFileJsonProp = parse_json_value(json_value)?;
            let source = IcalFileSource::new(prop.path)
                .with_classifier(marker(prop.description_marker));
            Ok(HolidayFeed::IcalFile(source))
        },
        FeedType::Static => {
            let prop: StaticJsonProp = parse_json_value(json_value)?;
            Ok(HolidayFeed::Static(StaticHolidaySource::new(prop.holidays)))
        }
    }
}

pub struct HolidayFeedManager;

impl HolidayFeedManager {
    pub fn new() -> Manager<HolidayFeed> {
        Manager::new(holiday_feed_from_json)
    }
}
