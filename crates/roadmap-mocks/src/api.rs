use serde::{Deserialize, Serialize};

use crate::error::ServerError;
use crate::types::RoadmapItem;

/// Backend surface the roadmap client talks to.
///
/// Real backends may reject a call with a [`ServerError`]. The mock provider
/// never does.
#[async_trait::async_trait]
pub trait ServerFunctions: Send + Sync {
    /// Full roadmap in source order, or `None` when no data is available.
    async fn get_roadmap_data(&self) -> Result<Option<Vec<RoadmapItem>>, ServerError>;

    async fn update_roadmap_item(&self, item: RoadmapItem) -> Result<bool, ServerError>;

    async fn invoke(&self, call: ServerCall) -> Result<ServerResponse, ServerError> {
        match call {
            ServerCall::GetRoadmapData => self
                .get_roadmap_data()
                .await
                .map(ServerResponse::RoadmapData),
            ServerCall::UpdateRoadmapItem(item) => self
                .update_roadmap_item(item)
                .await
                .map(ServerResponse::Updated),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum ServerFunction {
    #[serde(rename = "getRoadmapData")]
    GetRoadmapData,
    #[serde(rename = "updateRoadmapItem")]
    UpdateRoadmapItem,
}

impl ServerFunction {
    pub const ALL: [ServerFunction; 2] = [
        ServerFunction::GetRoadmapData,
        ServerFunction::UpdateRoadmapItem,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ServerFunction::GetRoadmapData => "getRoadmapData",
            ServerFunction::UpdateRoadmapItem => "updateRoadmapItem",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, ServerError> {
        match name {
            "getRoadmapData" => Ok(ServerFunction::GetRoadmapData),
            "updateRoadmapItem" => Ok(ServerFunction::UpdateRoadmapItem),
            _ => Err(ServerError::unknown_function(name)),
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            ServerFunction::GetRoadmapData => 0,
            ServerFunction::UpdateRoadmapItem => 1,
        }
    }
}

/// One invocation of a server function together with its arguments.
///
/// On the wire a call is `{"function": <name>, "args": [...]}` with
/// positional arguments, mirroring how the client spreads them into the
/// remote function.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCall", into = "RawCall")]
pub enum ServerCall {
    GetRoadmapData,
    UpdateRoadmapItem(RoadmapItem),
}

#[derive(Serialize, Deserialize)]
struct RawCall {
    function: String,
    #[serde(default)]
    args: Vec<serde_json::Value>,
}

impl TryFrom<RawCall> for ServerCall {
    type Error = ServerError;

    fn try_from(raw: RawCall) -> Result<Self, Self::Error> {
        ServerCall::from_parts(&raw.function, raw.args)
    }
}

impl From<ServerCall> for RawCall {
    fn from(call: ServerCall) -> Self {
        let function = call.function().name().to_string();
        let args = match call {
            ServerCall::GetRoadmapData => Vec::new(),
            ServerCall::UpdateRoadmapItem(item) => {
                serde_json::to_value(item).into_iter().collect()
            }
        };

        RawCall { function, args }
    }
}

impl ServerCall {
    /// Resolves a function name and positional JSON arguments into a call.
    pub fn from_parts(name: &str, args: Vec<serde_json::Value>) -> Result<Self, ServerError> {
        let function = ServerFunction::from_name(name)?;

        if args.len() != function.arity() {
            return Err(ServerError::invalid_arguments(format!(
                "{} expects {} argument(s), got {}",
                function.name(),
                function.arity(),
                args.len()
            )));
        }

        match function {
            ServerFunction::GetRoadmapData => Ok(ServerCall::GetRoadmapData),
            ServerFunction::UpdateRoadmapItem => {
                let mut args = args.into_iter();
                let value = args.next().unwrap_or(serde_json::Value::Null);
                let item = serde_json::from_value(value).map_err(|err| {
                    ServerError::invalid_arguments(format!(
                        "{} expects a roadmap item: {}",
                        function.name(),
                        err
                    ))
                })?;
                Ok(ServerCall::UpdateRoadmapItem(item))
            }
        }
    }

    pub fn function(&self) -> ServerFunction {
        match self {
            ServerCall::GetRoadmapData => ServerFunction::GetRoadmapData,
            ServerCall::UpdateRoadmapItem(_) => ServerFunction::UpdateRoadmapItem,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "function", content = "result")]
pub enum ServerResponse {
    #[serde(rename = "getRoadmapData")]
    RoadmapData(Option<Vec<RoadmapItem>>),
    #[serde(rename = "updateRoadmapItem")]
    Updated(bool),
}

impl ServerResponse {
    /// The bare value a success handler receives.
    pub fn into_json(self) -> serde_json::Value {
        match self {
            ServerResponse::RoadmapData(None) => serde_json::Value::Null,
            ServerResponse::RoadmapData(Some(items)) => serde_json::Value::Array(
                items
                    .into_iter()
                    .filter_map(|item| serde_json::to_value(item).ok())
                    .collect(),
            ),
            ServerResponse::Updated(updated) => serde_json::Value::Bool(updated),
        }
    }
}
