use super::domain::{NodeStatus, RoadmapError};
use super::model::{NodeDetailView, RoadmapModel};
use serde::Serialize;

const GRID_COLUMNS: usize = 4;
const GRID_X_SPACING: i32 = 200;
const GRID_Y_SPACING: i32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphPosition {
    pub x: i32,
    pub y: i32,
}

/// What the external canvas widget receives per node: an id, a layout
/// hint, and the node payload it renders however it likes.
#[derive(Debug, Clone, Serialize)]
pub struct GraphNodeView {
    pub id: &'static str,
    pub position: GraphPosition,
    pub data: NodeDetailView,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphEdgeView {
    pub id: String,
    pub source: String,
    pub target: String,
    pub animated: bool,
}

impl RoadmapModel {
    /// Node list for the canvas widget, laid out on a simple grid in
    /// insertion order.
    pub fn graph_nodes(&self) -> Vec<GraphNodeView> {
        self.nodes()
            .enumerate()
            .map(|(index, node)| GraphNodeView {
                id: node.id(),
                position: GraphPosition {
                    x: (index % GRID_COLUMNS) as i32 * GRID_X_SPACING,
                    y: (index / GRID_COLUMNS) as i32 * GRID_Y_SPACING,
                },
                data: node.to_view(),
            })
            .collect()
    }

    /// One directed edge per prerequisite relationship, prerequisite to
    /// dependent. Edges into an in-progress node animate.
    pub fn graph_edges(&self) -> Vec<GraphEdgeView> {
        self.nodes()
            .flat_map(|node| {
                node.template.prerequisites.iter().map(|prerequisite| {
                    GraphEdgeView {
                        id: format!("{prerequisite}-{}", node.id()),
                        source: prerequisite.to_string(),
                        target: node.id().to_string(),
                        animated: node.status == NodeStatus::InProgress,
                    }
                })
            })
            .collect()
    }
}

/// Cosmetic connections drawn by the user on the canvas. These live
/// beside the prerequisite DAG and never feed back into it: connecting
/// two nodes visually changes no dependency, status, or progress.
#[derive(Debug, Default)]
pub struct CanvasOverlay {
    connections: Vec<(String, String)>,
}

impl CanvasOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a connection event from the widget. Both endpoints must
    /// name existing nodes; otherwise the overlay is left untouched.
    pub fn connect(
        &mut self,
        model: &RoadmapModel,
        source: &str,
        target: &str,
    ) -> Result<(), RoadmapError> {
        if model.node(source).is_none() {
            return Err(RoadmapError::NodeNotFound(source.to_owned()));
        }
        if model.node(target).is_none() {
            return Err(RoadmapError::NodeNotFound(target.to_owned()));
        }

        self.connections
            .push((source.to_owned(), target.to_owned()));
        Ok(())
    }

    pub fn connections(&self) -> &[(String, String)] {
        &self.connections
    }

    /// Full edge list for rendering: derived prerequisite edges first,
    /// then the user-drawn overlay.
    pub fn edges(&self, model: &RoadmapModel) -> Vec<GraphEdgeView> {
        let mut edges = model.graph_edges();
        edges.extend(
            self.connections
                .iter()
                .map(|(source, target)| GraphEdgeView {
                    id: format!("{source}-{target}"),
                    source: source.clone(),
                    target: target.clone(),
                    animated: false,
                }),
        );
        edges
    }
}
