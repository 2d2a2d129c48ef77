use thiserror::Error;

/// Failure to obtain the holidays of a feed. Nothing is retried and no
/// partial holiday list is ever returned alongside one of these.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("holiday feed request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("holiday feed could not be read: {0}")]
    Io(#[from] std::io::Error),

    #[error("holiday feed is not valid iCalendar: {0}")]
    Ical(#[from] ical::parser::ParserError),

    #[error("holiday '{0}' has no start date")]
    MissingStart(String),

    #[error("'{0}' is not a valid iCalendar date")]
    InvalidDate(String)
}
