//! The roadmap tracker: a prerequisite DAG of learning nodes with
//! status buckets, weighted aggregate progress, and a graph projection
//! for the external canvas widget.

mod blueprint;
pub mod domain;
mod graph;
mod model;
mod router;

pub use blueprint::{NodeTemplate, RoadmapBlueprint};
pub use domain::{NodeKind, NodeStatus, RoadmapError};
pub use graph::{CanvasOverlay, GraphEdgeView, GraphNodeView, GraphPosition};
pub use model::{
    NodeDetailView, ProgressSummary, RoadmapModel, RoadmapNode, RoadmapSchedule, UP_NEXT_WINDOW,
};
pub use router::{roadmap_router, RoadmapState, SharedRoadmap};
