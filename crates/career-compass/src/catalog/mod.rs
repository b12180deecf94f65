//! Read-only content shipped with the application: career paths, quiz
//! questions, and the curated resource list. Everything is a compile-time
//! table; callers look up by identifier and iterate in declared order.

mod details;
mod paths;
mod questions;
mod resources;

pub use details::{
    detailed_career_path, DetailedCareerPath, PhaseOutline, PhaseResource, ProgressionStep,
};
pub use paths::{
    career_path, career_paths, find_career_path, CareerPath, CareerPathId, DemandLevel, Difficulty,
};
pub use questions::{find_question, quiz_questions, QuestionCategory, QuizQuestion};
pub use resources::{
    featured_resources, filter_resources, recommended_resources, resources, LearningResource,
    ResourceFilter, ResourceKind,
};
