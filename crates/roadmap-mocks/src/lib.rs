//! Mock server functions for roadmap client development.
//!
//! The roadmap client talks to its backend through named server functions
//! with success and failure continuations. This crate provides the typed
//! surface for those calls and a mock provider that answers them from local
//! JSON instead of a real backend.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod mock;
pub mod runner;
pub mod types;

use crate::config::MockOptions;
use crate::error::OptionsError;
use crate::mock::MockServerFunctions;
use crate::runner::ScriptRunner;

/// Mock-backed runner configured from the environment.
///
/// # Errors
/// Returns an error when `ROADMAP_MOCK_LATENCY_MS` is not an integer.
pub fn mock_runner() -> Result<ScriptRunner<MockServerFunctions>, OptionsError> {
    Ok(mock_runner_with_options(MockOptions::from_env()?))
}

pub fn mock_runner_with_options(options: MockOptions) -> ScriptRunner<MockServerFunctions> {
    ScriptRunner::new(MockServerFunctions::with_options(options))
}

pub mod prelude {
    pub use crate::api::{ServerCall, ServerFunction, ServerFunctions, ServerResponse};
    pub use crate::config::{DataSource, MockOptions};
    pub use crate::error::ServerError;
    pub use crate::mock::MockServerFunctions;
    pub use crate::runner::ScriptRunner;
    pub use crate::types::{RoadmapItem, RoadmapItemStatus};
}
