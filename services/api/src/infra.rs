use career_compass::error::AppError;
use career_compass::roadmap::{RoadmapState, SharedRoadmap};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the in-memory roadmap shared by the HTTP handlers. Seed
/// validation failures abort startup: malformed content is a
/// configuration defect, not a runtime condition.
pub(crate) fn seeded_roadmap() -> Result<SharedRoadmap, AppError> {
    let state = RoadmapState::seeded()?;
    Ok(Arc::new(Mutex::new(state)))
}
