/// The parts of a calendar event a classifier gets to look at.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedEvent<'a> {
    pub summary: Option<&'a str>,
    pub description: Option<&'a str>
}

/// Decides whether a feed event is a public holiday.
pub trait HolidayClassifier: Send + Sync {
    fn is_public_holiday(&self, event: &FeedEvent<'_>) -> bool;
}

impl<F> HolidayClassifier for F
where F: Fn(&FeedEvent<'_>) -> bool + Send + Sync {
    fn is_public_holiday(&self, event: &FeedEvent<'_>) -> bool {
        self(event)
    }
}

pub const PUBLIC_HOLIDAY_MARKER: &str = "public holiday";

/// Accepts events whose description contains a marker, ignoring case.
///
/// Public holiday calendars published by Google put "Public holiday" in the
/// description, while observances carry other text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionMarker {
    marker: String
}

impl DescriptionMarker {
    pub fn new(marker: &str) -> DescriptionMarker {
        DescriptionMarker { marker: marker.to_lowercase() }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }
}

impl Default for DescriptionMarker {
    fn default() -> Self {
        DescriptionMarker::new(PUBLIC_HOLIDAY_MARKER)
    }
}

impl HolidayClassifier for DescriptionMarker {
    fn is_public_holiday(&self, event: &FeedEvent<'_>) -> bool {
        event.description
            .map(|description| description.to_lowercase().contains(&self.marker))
            .unwrap_or(false)
    }
}
