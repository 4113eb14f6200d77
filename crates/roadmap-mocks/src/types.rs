use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub enum RoadmapItemStatus {
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "planned")]
    Planned,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl RoadmapItemStatus {
    pub fn from_string(status: &str) -> Result<Self, String> {
        match status {
            "" => Ok(RoadmapItemStatus::Unset),
            "planned" => Ok(RoadmapItemStatus::Planned),
            "in-progress" => Ok(RoadmapItemStatus::InProgress),
            "completed" => Ok(RoadmapItemStatus::Completed),
            other => Err(format!("Unknown roadmap item status: {}", other)),
        }
    }
}

/// A single entry on the roadmap timeline.
///
/// Nothing here is validated: ids are expected to be unique, `start_pi` is
/// expected not to come after `end_pi`, and `parent_id`/`dependencies` are
/// expected to reference existing ids without cycles. All of that is the
/// caller's responsibility.
#[derive(PartialEq, Eq, Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: String,
    pub title: String,
    pub owner: String,
    pub start_pi: String,
    pub end_pi: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    pub status: RoadmapItemStatus,
    // Order is significant for display
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
}

impl RoadmapItem {
    pub fn builder(id: impl Into<String>, title: impl Into<String>) -> RoadmapItemBuilder {
        RoadmapItemBuilder::new(id, title)
    }
}

#[derive(Clone, Debug)]
pub struct RoadmapItemBuilder {
    item: RoadmapItem,
}

impl RoadmapItemBuilder {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            item: RoadmapItem {
                id: id.into(),
                title: title.into(),
                owner: String::new(),
                start_pi: String::new(),
                end_pi: String::new(),
                parent_id: None,
                status: RoadmapItemStatus::Unset,
                dependencies: None,
            },
        }
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.item.owner = owner.into();
        self
    }

    /// Sets both ends of the active span.
    pub fn span(mut self, start_pi: impl Into<String>, end_pi: impl Into<String>) -> Self {
        self.item.start_pi = start_pi.into();
        self.item.end_pi = end_pi.into();
        self
    }

    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.item.parent_id = Some(parent_id.into());
        self
    }

    pub fn status(mut self, status: RoadmapItemStatus) -> Self {
        self.item.status = status;
        self
    }

    pub fn depends_on<D>(mut self, dependencies: D) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
    {
        self.item
            .dependencies
            .get_or_insert_with(Vec::new)
            .extend(dependencies.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> RoadmapItem {
        self.item
    }
}
