//! Career Compass domain crate: the content catalog, the quiz match
//! engine, and the roadmap progress model. Everything here is pure
//! in-memory computation; the HTTP/CLI shell lives in `services/api`.

pub mod catalog;
pub mod config;
pub mod error;
pub mod quiz;
pub mod roadmap;
pub mod telemetry;
