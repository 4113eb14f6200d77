use crate::api::{ServerFunction, ServerFunctions};
use crate::config::{DataSource, MockOptions};
use crate::error::{DataLoadError, ServerError};
use crate::types::RoadmapItem;

#[derive(Clone, Debug, Default)]
pub struct MockServerFunctions {
    options: MockOptions,
}

impl MockServerFunctions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MockOptions) -> Self {
        Self { options }
    }

    pub fn from_data_source(data_source: DataSource) -> Self {
        Self::with_options(MockOptions::default().with_data_source(data_source))
    }

    async fn load_roadmap(&self) -> Result<Vec<RoadmapItem>, DataLoadError> {
        let json = self.options.data_source.read().await?;
        Ok(serde_json::from_str(&json)?)
    }

    async fn simulate_round_trip(&self) {
        if let Some(latency) = self.options.latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait::async_trait]
impl ServerFunctions for MockServerFunctions {
    async fn get_roadmap_data(&self) -> Result<Option<Vec<RoadmapItem>>, ServerError> {
        let function = ServerFunction::GetRoadmapData.name();
        tracing::info!(function, "[MOCK] Server function {} executed", function);

        self.simulate_round_trip().await;

        // Load failures are reported here and never reach the caller
        match self.load_roadmap().await {
            Ok(items) => Ok(Some(items)),
            Err(err) => {
                tracing::error!(
                    function,
                    error = %err,
                    "Error loading local JSON data: {}",
                    err
                );
                Ok(None)
            }
        }
    }

    async fn update_roadmap_item(&self, item: RoadmapItem) -> Result<bool, ServerError> {
        let function = ServerFunction::UpdateRoadmapItem.name();
        tracing::info!(
            function,
            item_id = %item.id,
            "[MOCK] Server function {} executed",
            function
        );

        self.simulate_round_trip().await;

        Ok(true)
    }
}
