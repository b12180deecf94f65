use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeStatus {
    Completed,
    InProgress,
    Available,
    Locked,
}

impl NodeStatus {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Completed,
            Self::InProgress,
            Self::Available,
            Self::Locked,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::InProgress => "In Progress",
            Self::Available => "Available",
            Self::Locked => "Locked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Course,
    Tutorial,
    Project,
    Tool,
}

impl NodeKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Course => "Course",
            Self::Tutorial => "Tutorial",
            Self::Project => "Project",
            Self::Tool => "Tool",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RoadmapError {
    #[error("node with id {0} not found")]
    NodeNotFound(String),
    #[error("node {node} references unknown prerequisite {prerequisite}")]
    UnknownPrerequisite { node: String, prerequisite: String },
    #[error("roadmap seed contains no nodes")]
    EmptyRoadmap,
}
