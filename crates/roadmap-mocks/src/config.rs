use std::path::PathBuf;
use std::time::Duration;

use crate::error::{DataLoadError, OptionsError};

pub const DATA_PATH_ENV: &str = "ROADMAP_MOCK_DATA";
pub const LATENCY_ENV: &str = "ROADMAP_MOCK_LATENCY_MS";

const BUNDLED_ROADMAP_DATA: &str = include_str!("../data/roadmap-data.json");

/// Where the mock provider reads its roadmap from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    /// Sample data compiled into the crate.
    Bundled,
    /// A JSON file, re-read on every call.
    Path(PathBuf),
    Inline(String),
}

impl DataSource {
    /// Raw JSON text of the source. Nothing is cached between calls.
    pub async fn read(&self) -> Result<String, DataLoadError> {
        match self {
            DataSource::Bundled => Ok(BUNDLED_ROADMAP_DATA.to_string()),
            DataSource::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| DataLoadError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            DataSource::Inline(json) => Ok(json.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MockOptions {
    pub data_source: DataSource,
    pub latency: Option<Duration>,
}

impl Default for MockOptions {
    fn default() -> Self {
        Self {
            data_source: DataSource::Bundled,
            latency: None,
        }
    }
}

impl MockOptions {
    /// Reads `ROADMAP_MOCK_DATA` and `ROADMAP_MOCK_LATENCY_MS`, falling back
    /// to the bundled data with no latency when they are unset.
    pub fn from_env() -> Result<Self, OptionsError> {
        let mut options = Self::default();

        if let Some(path) = std::env::var_os(DATA_PATH_ENV) {
            if !path.is_empty() {
                options.data_source = DataSource::Path(PathBuf::from(path));
            }
        }

        if let Ok(value) = std::env::var(LATENCY_ENV) {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|source| OptionsError::InvalidLatency {
                    value: value.clone(),
                    source,
                })?;
            options.latency = Some(Duration::from_millis(millis));
        }

        Ok(options)
    }

    pub fn with_data_source(mut self, data_source: DataSource) -> Self {
        self.data_source = data_source;
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}
