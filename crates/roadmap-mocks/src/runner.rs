use std::sync::Arc;

use crate::api::{ServerCall, ServerFunctions};
use crate::error::ServerError;
use crate::types::RoadmapItem;

type SuccessHandler = Arc<dyn Fn(serde_json::Value) + Send + Sync>;
type FailureHandler = Arc<dyn Fn(ServerError) + Send + Sync>;

/// Callback-style front for any [`ServerFunctions`] implementation.
///
/// Handlers are attached by chaining, and every attach returns a new runner
/// so a base runner can be shared and specialised per call site:
///
/// ```ignore
/// runner
///     .with_success_handler(|items| render(items))
///     .with_failure_handler(|err| report(err))
///     .run("getRoadmapData", vec![])
///     .await;
/// ```
///
/// The outcome is also returned, so callers that prefer direct resolution
/// can ignore the handlers entirely.
pub struct ScriptRunner<F: ServerFunctions> {
    functions: Arc<F>,
    on_success: Option<SuccessHandler>,
    on_failure: Option<FailureHandler>,
}

impl<F: ServerFunctions> Clone for ScriptRunner<F> {
    fn clone(&self) -> Self {
        Self {
            functions: self.functions.clone(),
            on_success: self.on_success.clone(),
            on_failure: self.on_failure.clone(),
        }
    }
}

impl<F: ServerFunctions> ScriptRunner<F> {
    pub fn new(functions: F) -> Self {
        Self::from_shared(Arc::new(functions))
    }

    pub fn from_shared(functions: Arc<F>) -> Self {
        Self {
            functions,
            on_success: None,
            on_failure: None,
        }
    }

    pub fn with_success_handler<H>(&self, handler: H) -> Self
    where
        H: Fn(serde_json::Value) + Send + Sync + 'static,
    {
        let mut runner = self.clone();
        runner.on_success = Some(Arc::new(handler));
        runner
    }

    pub fn with_failure_handler<H>(&self, handler: H) -> Self
    where
        H: Fn(ServerError) + Send + Sync + 'static,
    {
        let mut runner = self.clone();
        runner.on_failure = Some(Arc::new(handler));
        runner
    }

    /// Invokes a server function by name with positional JSON arguments.
    pub async fn run(
        &self,
        name: &str,
        args: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, ServerError> {
        match ServerCall::from_parts(name, args) {
            Ok(call) => self.dispatch(call).await,
            Err(err) => {
                tracing::warn!(function = name, error = %err, "rejected server call");
                self.settle(Err(err))
            }
        }
    }

    pub async fn get_roadmap_data(&self) -> Result<serde_json::Value, ServerError> {
        self.dispatch(ServerCall::GetRoadmapData).await
    }

    pub async fn update_roadmap_item(
        &self,
        item: RoadmapItem,
    ) -> Result<serde_json::Value, ServerError> {
        self.dispatch(ServerCall::UpdateRoadmapItem(item)).await
    }

    async fn dispatch(&self, call: ServerCall) -> Result<serde_json::Value, ServerError> {
        tracing::debug!(function = call.function().name(), "dispatching server call");

        let outcome = self
            .functions
            .invoke(call)
            .await
            .map(|response| response.into_json());

        self.settle(outcome)
    }

    fn settle(
        &self,
        outcome: Result<serde_json::Value, ServerError>,
    ) -> Result<serde_json::Value, ServerError> {
        match &outcome {
            Ok(value) => {
                if let Some(handler) = &self.on_success {
                    handler(value.clone());
                }
            }
            Err(err) => {
                if let Some(handler) = &self.on_failure {
                    handler(err.clone());
                }
            }
        }

        outcome
    }
}
