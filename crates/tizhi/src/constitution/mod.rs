//! TCM body-constitution (体质) questionnaire scoring.
//!
//! [`ConstitutionScorer`] is the pure classifier: 30 ratings in, a primary constitution and up
//! to three secondary constitutions out. The service and router layers wrap it with result
//! storage and an HTTP surface.

pub mod domain;
pub mod profile;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use domain::{ResultId, ResultRecord, ResultSummaryView, SubmitResultView, TestSubmission};
pub use profile::ConstitutionProfile;
pub use questionnaire::{Question, QUESTIONS, QUESTION_COUNT};
pub use repository::{RepositoryError, ResultRepository};
pub use router::constitution_router;
pub use scoring::{
    ClassificationResult, ConstitutionScorer, PercentageScoreMap, RawScoreMap,
    ScoringConfig, SecondaryConstitution, ValidationError,
};
pub use service::{ConstitutionService, ResultServiceError};
pub use types::{ConstitutionType, UnknownConstitution};
