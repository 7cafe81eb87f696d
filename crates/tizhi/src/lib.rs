//! Constitution (体质) questionnaire scoring, result service, and shared service plumbing.

pub mod config;
pub mod constitution;
pub mod error;
pub mod telemetry;
