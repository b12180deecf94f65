use super::blueprint::{NodeTemplate, RoadmapBlueprint};
use super::domain::{NodeKind, NodeStatus, RoadmapError};
use crate::catalog::Difficulty;
use indexmap::IndexMap;
use serde::Serialize;

/// How many available nodes the "up next" window shows before the rest
/// spill into the future bucket.
pub const UP_NEXT_WINDOW: usize = 8;

/// A seeded node plus its mutable tracking state. Only `set_status` on
/// the owning model may write to it.
#[derive(Debug, Clone)]
pub struct RoadmapNode {
    pub template: NodeTemplate,
    pub status: NodeStatus,
    pub progress: Option<u8>,
}

impl RoadmapNode {
    pub fn id(&self) -> &'static str {
        self.template.id
    }

    pub fn to_view(&self) -> NodeDetailView {
        NodeDetailView {
            id: self.template.id,
            title: self.template.title,
            kind: self.template.kind,
            kind_label: self.template.kind.label(),
            duration: self.template.duration,
            difficulty: self.template.difficulty,
            difficulty_label: self.template.difficulty.label(),
            description: self.template.description,
            prerequisites: self.template.prerequisites,
            pathways: self.template.pathways,
            phase: self.template.phase,
            url: self.template.url,
            status: self.status,
            status_label: self.status.label(),
            progress: self.progress,
        }
    }
}

/// Flattened node representation for API responses and rendering.
#[derive(Debug, Clone, Serialize)]
pub struct NodeDetailView {
    pub id: &'static str,
    pub title: &'static str,
    pub kind: NodeKind,
    pub kind_label: &'static str,
    pub duration: &'static str,
    pub difficulty: Difficulty,
    pub difficulty_label: &'static str,
    pub description: &'static str,
    pub prerequisites: &'static [&'static str],
    pub pathways: &'static [&'static str],
    pub phase: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<&'static str>,
    pub status: NodeStatus,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
}

/// Aggregate completion across the roadmap. `in_progress` is a plain
/// node count; the percentage weighs each in-progress node by its own
/// progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub completed: usize,
    pub in_progress: usize,
    pub total: usize,
    pub percentage: u8,
}

/// Display partition of the not-yet-started nodes: a short up-next
/// window of available work, then everything else with locked nodes
/// always sorted after the available overflow.
#[derive(Debug, Clone, Serialize)]
pub struct RoadmapSchedule {
    pub up_next: Vec<NodeDetailView>,
    pub future: Vec<NodeDetailView>,
}

/// The roadmap: an insertion-ordered map of nodes keyed by id. The map
/// is owned by a single view for its lifetime; reads are always
/// consistent because only `set_status` mutates, one node at a time.
#[derive(Debug)]
pub struct RoadmapModel {
    nodes: IndexMap<&'static str, RoadmapNode>,
}

impl RoadmapModel {
    /// Build the model from a blueprint, rejecting malformed seed data:
    /// an empty node set or a prerequisite pointing at no known node is
    /// a configuration defect, caught here rather than guarded on every
    /// read.
    pub fn new(blueprint: &RoadmapBlueprint) -> Result<Self, RoadmapError> {
        let templates = blueprint.node_templates();
        if templates.is_empty() {
            return Err(RoadmapError::EmptyRoadmap);
        }

        let mut nodes = IndexMap::with_capacity(templates.len());
        for template in templates {
            nodes.insert(
                template.id,
                RoadmapNode {
                    template: template.clone(),
                    status: template.status,
                    progress: template.progress,
                },
            );
        }

        for template in templates {
            for prerequisite in template.prerequisites {
                if !nodes.contains_key(prerequisite) {
                    return Err(RoadmapError::UnknownPrerequisite {
                        node: template.id.to_string(),
                        prerequisite: prerequisite.to_string(),
                    });
                }
            }
        }

        Ok(Self { nodes })
    }

    pub fn standard() -> Result<Self, RoadmapError> {
        Self::new(&RoadmapBlueprint::standard())
    }

    /// Replace one node's status. Completing a node also forces its
    /// progress to 100; every other transition leaves progress alone,
    /// including moving away from completed. Prerequisites gate nothing
    /// here: a manual override may complete a node whose prerequisites
    /// are still locked.
    pub fn set_status(&mut self, node_id: &str, status: NodeStatus) -> Result<(), RoadmapError> {
        let node = self
            .nodes
            .get_mut(node_id)
            .ok_or_else(|| RoadmapError::NodeNotFound(node_id.to_owned()))?;

        node.status = status;
        if status == NodeStatus::Completed {
            node.progress = Some(100);
        }

        tracing::debug!(node_id, status = status.label(), "roadmap node updated");
        Ok(())
    }

    pub fn node(&self, node_id: &str) -> Option<&RoadmapNode> {
        self.nodes.get(node_id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &RoadmapNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes currently at `status`, in insertion order.
    pub fn nodes_by_status(&self, status: NodeStatus) -> Vec<&RoadmapNode> {
        self.nodes
            .values()
            .filter(|node| node.status == status)
            .collect()
    }

    pub fn progress(&self) -> ProgressSummary {
        let completed = self.nodes_by_status(NodeStatus::Completed).len();
        let in_progress_nodes = self.nodes_by_status(NodeStatus::InProgress);
        let in_progress = in_progress_nodes.len();
        let total = self.nodes.len();

        // In-progress nodes count fractionally toward the percentage.
        let in_progress_weight: f32 = in_progress_nodes
            .iter()
            .map(|node| f32::from(node.progress.unwrap_or(0)) / 100.0)
            .sum();

        let percentage = if total == 0 {
            0
        } else {
            ((completed as f32 + in_progress_weight) / total as f32 * 100.0).round() as u8
        };

        ProgressSummary {
            completed,
            in_progress,
            total,
            percentage,
        }
    }

    pub fn schedule(&self) -> RoadmapSchedule {
        let available = self.nodes_by_status(NodeStatus::Available);
        let locked = self.nodes_by_status(NodeStatus::Locked);

        let up_next = available
            .iter()
            .take(UP_NEXT_WINDOW)
            .map(|node| node.to_view())
            .collect();

        let future = available
            .iter()
            .skip(UP_NEXT_WINDOW)
            .chain(locked.iter())
            .map(|node| node.to_view())
            .collect();

        RoadmapSchedule { up_next, future }
    }

    pub fn node_details(&self) -> Vec<NodeDetailView> {
        self.nodes.values().map(RoadmapNode::to_view).collect()
    }
}
