use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

use super::fetched::{Collection, FetchError, Fetched, RecordSource};
use crate::config::GatewayConfig;
use crate::records::{Attendant, FlightSummary, Passenger, Pilot};

/// Blocking HTTP client for the record services
pub struct HttpGateway {
    client: Client,
    config: GatewayConfig,
}

impl HttpGateway {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent("skycrew-roster")
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, config })
    }

    /// Fetch a whole collection. Never fails; failures are logged and tagged.
    pub fn fetch<T: DeserializeOwned>(&self, collection: Collection) -> Fetched<T> {
        let url = self.config.url_for(collection);

        match self.try_fetch(&url) {
            Ok(records) => {
                debug!(%collection, %url, count = records.len(), "fetched records");
                Fetched::Records(records)
            }
            Err(err) => {
                warn!(
                    %collection,
                    %url,
                    kind = err.kind(),
                    error = %err,
                    "fetch failed, continuing without these records"
                );
                Fetched::Failed(err)
            }
        }
    }

    fn try_fetch<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status));
        }

        let text = response.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl RecordSource for HttpGateway {
    fn flights(&self) -> Fetched<FlightSummary> {
        self.fetch(Collection::Flights)
    }

    fn pilots(&self) -> Fetched<Pilot> {
        self.fetch(Collection::Pilots)
    }

    fn cabin_crew(&self) -> Fetched<Attendant> {
        self.fetch(Collection::CabinCrew)
    }

    fn passengers(&self) -> Fetched<Passenger> {
        self.fetch(Collection::Passengers)
    }
}
