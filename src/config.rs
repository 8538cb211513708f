use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::gateway::Collection;
use crate::roster::SeatLayout;

const APP_NAME: &str = "skycrew-roster";
const CONFIG_FILE: &str = "config.toml";
const DB_FILE: &str = "rosters.db";

/// Top-level configuration, read from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gateway: GatewayConfig,
    pub store: StoreConfig,
    pub seating: SeatingConfig,
}

/// Where and how to reach the record services
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    pub base_url: String,
    /// Per-request timeout. None waits indefinitely.
    pub timeout_secs: Option<u64>,
    pub flights: String,
    pub pilots: String,
    pub cabin_crew: String,
    pub passengers: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/api".to_string(),
            timeout_secs: None,
            flights: "flight-info/flights".to_string(),
            pilots: "pilots/pilots".to_string(),
            cabin_crew: "cabin-crew/attendants".to_string(),
            passengers: "passengers/passengers".to_string(),
        }
    }
}

impl GatewayConfig {
    pub fn endpoint(&self, collection: Collection) -> &str {
        match collection {
            Collection::Flights => &self.flights,
            Collection::Pilots => &self.pilots,
            Collection::CabinCrew => &self.cabin_crew,
            Collection::Passengers => &self.passengers,
        }
    }

    /// Full URL of a collection, always with a trailing slash
    pub fn url_for(&self, collection: Collection) -> String {
        format!(
            "{}/{}/",
            self.base_url.trim_end_matches('/'),
            self.endpoint(collection).trim_matches('/')
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: Option<PathBuf>,
}

impl StoreConfig {
    /// Configured database path, or the per-user data directory
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            return Ok(path.clone());
        }

        let proj_dirs = project_dirs()?;
        let data_dir = proj_dirs.data_dir();
        fs::create_dir_all(data_dir).context("Failed to create data directory")?;
        Ok(data_dir.join(DB_FILE))
    }
}

/// Seat layouts, with per-aircraft overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    pub default: SeatLayout,
    /// Keyed by aircraft type as the flight service reports it
    pub aircraft: BTreeMap<String, SeatLayout>,
}

impl SeatingConfig {
    pub fn layout_for(&self, aircraft: &str) -> &SeatLayout {
        self.aircraft.get(aircraft).unwrap_or(&self.default)
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the per-user config file is
    /// used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML")
    }

    pub fn validate(&self) -> Result<()> {
        if self.gateway.base_url.trim().is_empty() {
            bail!("gateway.base_url must not be empty");
        }

        self.seating
            .default
            .validate()
            .context("Invalid seating.default layout")?;
        for (aircraft, layout) in &self.seating.aircraft {
            layout
                .validate()
                .with_context(|| format!("Invalid seat layout for aircraft '{}'", aircraft))?;
        }

        Ok(())
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME).context("Could not determine home directory")
}

/// Per-user config file location, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}
