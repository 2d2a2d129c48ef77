use std::future::Future;
use std::path::{
    Path,
    PathBuf
};
use std::sync::Arc;

use tracing::{
    error,
    info
};

use crate::feed::feederror::FeedError;
use crate::feed::holidayclassifier::{
    DescriptionMarker,
    HolidayClassifier
};
use crate::feed::icalparser::parse_ical_holidays;
use crate::time::calendar::holiday::Holiday;

/// Something that yields the public holidays of one feed.
///
/// A fetch resolves once with the complete list or fails once; there is no
/// retry and no timeout at this level.
pub trait HolidaySource: Send + Sync {
    fn fetch_holidays(&self) -> impl Future<Output = Result<Vec<Holiday>, FeedError>> + Send;

    /// Short identification used in log records.
    fn identifier(&self) -> String;
}

fn logged(identifier: String, result: Result<Vec<Holiday>, FeedError>) -> Result<Vec<Holiday>, FeedError> {
    match &result {
        Ok(holidays) => info!(feed = %identifier, holidays = holidays.len(), "holiday feed loaded"),
        Err(err) => error!(feed = %identifier, error = %err, "holiday feed failed")
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// IcalUrlSource
// ─────────────────────────────────────────────────────────────────────────────

/// iCalendar feed served over HTTP(S), e.g. the Slovak public holidays
/// calendar:
/// ```text
/// https://calendar.google.com/calendar/ical/en.slovak%23holiday%40group.v.calendar.google.com/public/basic.ics
/// ```
#[derive(Clone)]
pub struct IcalUrlSource {
    url: String,
    client: reqwest::Client,
    classifier: Arc<dyn HolidayClassifier>
}

impl IcalUrlSource {
    pub fn new(url: impl Into<String>) -> IcalUrlSource {
        IcalUrlSource {
            url: url.into(),
            client: reqwest::Client::new(),
            classifier: Arc::new(DescriptionMarker::default())
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn HolidayClassifier>) -> IcalUrlSource {
        self.classifier = classifier;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn download(&self) -> Result<Vec<Holiday>, FeedError> {
        let ics = self.client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_ical_holidays(&ics, self.classifier.as_ref())
    }
}

impl HolidaySource for IcalUrlSource {
    async fn fetch_holidays(&self) -> Result<Vec<Holiday>, FeedError> {
        logged(self.identifier(), self.download().await)
    }

    fn identifier(&self) -> String {
        self.url.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// IcalFileSource
// ─────────────────────────────────────────────────────────────────────────────

/// iCalendar feed stored in a local file.
#[derive(Clone)]
pub struct IcalFileSource {
    path: PathBuf,
    classifier: Arc<dyn HolidayClassifier>
}

impl IcalFileSource {
    pub fn new(path: impl Into<PathBuf>) -> IcalFileSource {
        IcalFileSource {
            path: path.into(),
            classifier: Arc::new(DescriptionMarker::default())
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn HolidayClassifier>) -> IcalFileSource {
        self.classifier = classifier;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Holiday>, FeedError> {
        let ics = tokio::fs::read_to_string(&self.path).await?;
        parse_ical_holidays(&ics, self.classifier.as_ref())
    }
}

impl HolidaySource for IcalFileSource {
    async fn fetch_holidays(&self) -> Result<Vec<Holiday>, FeedError> {
        logged(self.identifier(), self.read().await)
    }

    fn identifier(&self) -> String {
        self.path.display().to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// StaticHolidaySource
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed list of holidays, no I/O.
#[derive(Clone, Default)]
pub struct StaticHolidaySource {
    holidays: Vec<Holiday>
}

impl StaticHolidaySource {
    pub fn new(holidays: Vec<Holiday>) -> StaticHolidaySource {
        StaticHolidaySource { holidays }
    }
}

impl HolidaySource for StaticHolidaySource {
    async fn fetch_holidays(&self) -> Result<Vec<Holiday>, FeedError> {
        Ok(self.holidays.clone())
    }

    fn identifier(&self) -> String {
        "static".to_owned()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// HolidayFeed
// ─────────────────────────────────────────────────────────────────────────────

/// A source picked at run time, from the command line or the configuration.
#[derive(Clone)]
pub enum HolidayFeed {
    IcalUrl(IcalUrlSource),
    IcalFile(IcalFileSource),
    Static(StaticHolidaySource)
}

impl HolidaySource for HolidayFeed {
    async fn fetch_holidays(&self) -> Result<Vec<Holiday>, FeedError> {
        match self {
            HolidayFeed::IcalUrl(source) => source.fetch_holidays().await,
            HolidayFeed::IcalFile(source) => source.fetch_holidays().await,
            HolidayFeed::Static(source) => source.fetch_holidays().await
        }
    }

    fn identifier(&self) -> String {
        match self {
            HolidayFeed::IcalUrl(source) => source.identifier(),
            HolidayFeed::IcalFile(source) => source.identifier(),
            HolidayFeed::Static(source) => source.identifier()
        }
    }
}
