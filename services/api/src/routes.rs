use crate::infra::AppState;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use career_compass::catalog::{
    self, CareerPath, CareerPathId, DemandLevel, Difficulty, LearningResource, QuestionCategory,
    ResourceFilter,
};
use career_compass::quiz::{Answer, MatchEngine};
use career_compass::roadmap::{roadmap_router, SharedRoadmap};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Assemble the full application router: the roadmap board plus the
/// stateless catalog and quiz endpoints and the operational probes.
pub(crate) fn with_domain_routes(roadmap: SharedRoadmap) -> axum::Router {
    roadmap_router(roadmap)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/paths", axum::routing::get(paths_endpoint))
        .route(
            "/api/v1/paths/:path_id",
            axum::routing::get(path_detail_endpoint),
        )
        .route(
            "/api/v1/quiz/questions",
            axum::routing::get(questions_endpoint),
        )
        .route(
            "/api/v1/quiz/matches",
            axum::routing::post(quiz_matches_endpoint),
        )
        .route("/api/v1/resources", axum::routing::get(resources_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Serialize)]
pub(crate) struct CareerPathView {
    pub(crate) id: CareerPathId,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) difficulty: Difficulty,
    pub(crate) difficulty_label: &'static str,
    pub(crate) time_to_job: &'static str,
    pub(crate) avg_salary: &'static str,
    pub(crate) demand: DemandLevel,
    pub(crate) demand_label: &'static str,
    pub(crate) skills: &'static [&'static str],
}

impl CareerPathView {
    fn from_path(path: &'static CareerPath) -> Self {
        Self {
            id: path.id,
            title: path.title,
            description: path.description,
            difficulty: path.difficulty,
            difficulty_label: path.difficulty.label(),
            time_to_job: path.time_to_job,
            avg_salary: path.avg_salary,
            demand: path.demand,
            demand_label: path.demand.label(),
            skills: path.skills,
        }
    }
}

pub(crate) async fn paths_endpoint() -> Json<Vec<CareerPathView>> {
    let views = catalog::career_paths()
        .iter()
        .map(CareerPathView::from_path)
        .collect();
    Json(views)
}

pub(crate) async fn path_detail_endpoint(Path(path_id): Path<String>) -> Response {
    match CareerPathId::from_slug(&path_id) {
        Some(id) => {
            let detail = catalog::detailed_career_path(id);
            (StatusCode::OK, Json(detail)).into_response()
        }
        None => {
            let payload = json!({ "error": format!("career path {path_id} not found") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct QuestionView {
    pub(crate) id: &'static str,
    pub(crate) prompt: &'static str,
    pub(crate) description: &'static str,
    pub(crate) category: QuestionCategory,
    pub(crate) category_label: &'static str,
}

pub(crate) async fn questions_endpoint() -> Json<Vec<QuestionView>> {
    let views = catalog::quiz_questions()
        .iter()
        .map(|question| QuestionView {
            id: question.id,
            prompt: question.prompt,
            description: question.description,
            category: question.category,
            category_label: question.category.label(),
        })
        .collect();
    Json(views)
}

#[derive(Debug, Deserialize)]
pub(crate) struct MatchRequest {
    #[serde(default)]
    pub(crate) answers: Vec<Answer>,
}

/// A match joined with its catalog summary, the shape the results page
/// renders directly.
#[derive(Debug, Serialize)]
pub(crate) struct MatchView {
    pub(crate) path: CareerPathId,
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) score: f32,
    pub(crate) reasons: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct MatchResponse {
    pub(crate) matches: Vec<MatchView>,
}

pub(crate) async fn quiz_matches_endpoint(
    Json(request): Json<MatchRequest>,
) -> Json<MatchResponse> {
    let engine = MatchEngine::default();
    let matches = engine
        .compute_matches(&request.answers)
        .into_iter()
        .map(|entry| {
            let path = catalog::career_path(entry.path);
            MatchView {
                path: entry.path,
                title: path.title,
                description: path.description,
                score: entry.score,
                reasons: entry.reasons,
            }
        })
        .collect();

    Json(MatchResponse { matches })
}

#[derive(Debug, Serialize)]
pub(crate) struct ResourcesResponse {
    pub(crate) count: usize,
    pub(crate) resources: Vec<&'static LearningResource>,
}

pub(crate) async fn resources_endpoint(
    Query(filter): Query<ResourceFilter>,
) -> Json<ResourcesResponse> {
    let resources = catalog::filter_resources(&filter);
    Json(ResourcesResponse {
        count: resources.len(),
        resources,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seeded_roadmap;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn quiz_matches_endpoint_joins_catalog_summaries() {
        let request = MatchRequest {
            answers: vec![Answer::new("q10", true), Answer::new("q13", true)],
        };

        let Json(body) = quiz_matches_endpoint(Json(request)).await;

        assert!(body.matches.len() <= 5);
        let top = &body.matches[0];
        assert_eq!(top.path, CareerPathId::FullStack);
        assert_eq!(top.title, "Full-Stack Developer");
        assert!(top.score > 0.0);
        assert!(top
            .reasons
            .contains(&"You want to build complete applications"));
    }

    #[tokio::test]
    async fn quiz_matches_endpoint_accepts_empty_answer_sets() {
        let Json(body) = quiz_matches_endpoint(Json(MatchRequest { answers: vec![] })).await;

        assert_eq!(body.matches.len(), 5);
        assert!(body.matches.iter().all(|entry| entry.score == 0.0));
    }

    #[tokio::test]
    async fn path_detail_endpoint_handles_unknown_slugs() {
        let found = path_detail_endpoint(Path("frontend".to_string())).await;
        assert_eq!(found.status(), StatusCode::OK);

        let missing = path_detail_endpoint(Path("quantum-dev".to_string())).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn resources_endpoint_applies_query_filters() {
        let filter = ResourceFilter {
            free_only: true,
            ..ResourceFilter::default()
        };
        let Json(body) = resources_endpoint(Query(filter)).await;

        assert_eq!(body.count, body.resources.len());
        assert!(body.resources.iter().all(|resource| resource.free));
    }

    #[tokio::test]
    async fn roadmap_status_route_updates_progress() {
        let app = with_domain_routes(seeded_roadmap().expect("seed is well-formed"));

        let before = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/roadmap/progress")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let before_body = to_bytes(before.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let before_json: serde_json::Value =
            serde_json::from_slice(&before_body).expect("valid json");

        let update = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/roadmap/nodes/numpy-pandas/status")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"status":"completed"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(update.status(), StatusCode::OK);

        let after = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/roadmap/progress")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        let after_body = to_bytes(after.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let after_json: serde_json::Value = serde_json::from_slice(&after_body).expect("valid json");

        assert_eq!(before_json["completed"], json!(2));
        assert_eq!(after_json["completed"], json!(3));
    }

    #[tokio::test]
    async fn roadmap_status_route_rejects_unknown_nodes() {
        let app = with_domain_routes(seeded_roadmap().expect("seed is well-formed"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/roadmap/nodes/not-a-node/status")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"status":"completed"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
