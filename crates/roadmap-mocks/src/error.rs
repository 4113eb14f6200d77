use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error descriptor handed to failure handlers.
///
/// Every field is optional because remote backends are free to reject a call
/// with nothing more than a bare message, or with nothing at all.
#[derive(Clone, Debug, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", .message.as_deref().unwrap_or("unknown server error"))]
pub struct ServerError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ServerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn named(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            name: Some(name.into()),
            stack: None,
        }
    }

    pub fn unknown_function(name: &str) -> Self {
        Self::named(
            "UnknownServerFunction",
            format!("Unknown server function: {}", name),
        )
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::named("InvalidArguments", message)
    }
}

/// Failure to produce the roadmap collection from its data source.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read roadmap data from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse roadmap data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("invalid mock latency {value:?}: {source}")]
    InvalidLatency {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
