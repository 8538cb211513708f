use std::fmt;

use crate::records::{Attendant, FlightSummary, Passenger, Pilot};

/// Record collections exposed by the external services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Flights,
    Pilots,
    CabinCrew,
    Passengers,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Flights => write!(f, "flights"),
            Collection::Pilots => write!(f, "pilots"),
            Collection::CabinCrew => write!(f, "cabin crew"),
            Collection::Passengers => write!(f, "passengers"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Short failure category for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport(_) => "transport",
            FetchError::Status(_) => "status",
            FetchError::Parse(_) => "parse",
        }
    }
}

/// Result of fetching a collection.
///
/// Generation is fail-open: a failed fetch is treated as an empty
/// collection. Keeping the failure around lets callers log the difference
/// between "the service has no records" and "the service could not be read".
#[derive(Debug)]
pub enum Fetched<T> {
    Records(Vec<T>),
    Failed(FetchError),
}

impl<T> Fetched<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Fetched::Failed(_))
    }

    /// Records, or an empty list if the fetch failed
    pub fn into_records(self) -> Vec<T> {
        match self {
            Fetched::Records(records) => records,
            Fetched::Failed(_) => Vec::new(),
        }
    }
}

/// Read access to the record services
pub trait RecordSource {
    fn flights(&self) -> Fetched<FlightSummary>;
    fn pilots(&self) -> Fetched<Pilot>;
    fn cabin_crew(&self) -> Fetched<Attendant>;
    fn passengers(&self) -> Fetched<Passenger>;
}
