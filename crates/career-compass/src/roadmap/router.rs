use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{NodeStatus, RoadmapError};
use super::graph::{CanvasOverlay, GraphEdgeView, GraphNodeView};
use super::model::{NodeDetailView, ProgressSummary, RoadmapModel, RoadmapSchedule};

/// Roadmap state shared with the HTTP layer. The core model assumes a
/// single writer; behind a multi-threaded server that becomes a mutex
/// around the whole board.
#[derive(Debug)]
pub struct RoadmapState {
    pub model: RoadmapModel,
    pub overlay: CanvasOverlay,
}

impl RoadmapState {
    pub fn seeded() -> Result<Self, RoadmapError> {
        Ok(Self {
            model: RoadmapModel::standard()?,
            overlay: CanvasOverlay::new(),
        })
    }
}

pub type SharedRoadmap = Arc<Mutex<RoadmapState>>;

/// Router builder exposing the roadmap board over HTTP.
pub fn roadmap_router(state: SharedRoadmap) -> Router {
    Router::new()
        .route("/api/v1/roadmap", get(overview_handler))
        .route("/api/v1/roadmap/progress", get(progress_handler))
        .route(
            "/api/v1/roadmap/nodes/:node_id/status",
            post(status_handler),
        )
        .route("/api/v1/roadmap/connections", post(connect_handler))
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct GraphView {
    nodes: Vec<GraphNodeView>,
    edges: Vec<GraphEdgeView>,
}

#[derive(Debug, Serialize)]
struct RoadmapOverview {
    nodes: Vec<NodeDetailView>,
    progress: ProgressSummary,
    schedule: RoadmapSchedule,
    graph: GraphView,
}

#[derive(Debug, Deserialize)]
struct StatusChangeRequest {
    status: NodeStatus,
}

#[derive(Debug, Deserialize)]
struct ConnectionRequest {
    source: String,
    target: String,
}

async fn overview_handler(State(state): State<SharedRoadmap>) -> Json<RoadmapOverview> {
    let board = state.lock().expect("roadmap mutex poisoned");
    Json(RoadmapOverview {
        nodes: board.model.node_details(),
        progress: board.model.progress(),
        schedule: board.model.schedule(),
        graph: GraphView {
            nodes: board.model.graph_nodes(),
            edges: board.overlay.edges(&board.model),
        },
    })
}

async fn progress_handler(State(state): State<SharedRoadmap>) -> Json<ProgressSummary> {
    let board = state.lock().expect("roadmap mutex poisoned");
    Json(board.model.progress())
}

async fn status_handler(
    State(state): State<SharedRoadmap>,
    Path(node_id): Path<String>,
    Json(request): Json<StatusChangeRequest>,
) -> Response {
    let mut board = state.lock().expect("roadmap mutex poisoned");
    match board.model.set_status(&node_id, request.status) {
        Ok(()) => {
            tracing::info!(%node_id, status = request.status.label(), "status changed");
            match board.model.node(&node_id) {
                Some(node) => (StatusCode::OK, Json(node.to_view())).into_response(),
                None => {
                    let payload = json!({ "error": format!("node with id {node_id} not found") });
                    (StatusCode::NOT_FOUND, Json(payload)).into_response()
                }
            }
        }
        Err(error @ RoadmapError::NodeNotFound(_)) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({ "error": other.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

async fn connect_handler(
    State(state): State<SharedRoadmap>,
    Json(request): Json<ConnectionRequest>,
) -> Response {
    let mut board = state.lock().expect("roadmap mutex poisoned");
    let RoadmapState { model, overlay } = &mut *board;
    match overlay.connect(model, &request.source, &request.target) {
        Ok(()) => {
            let payload = json!({ "connections": overlay.connections().len() });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
