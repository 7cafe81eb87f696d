mod config;
mod policy;
mod rules;

pub use config::{
    ScoringConfig, PEACE_OTHERS_CEILING, SCORE_CONVERT_FACTOR, THRESHOLD_PEACE,
    THRESHOLD_PRIMARY, THRESHOLD_SECONDARY,
};
pub use rules::ValidationError;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::ConstitutionType;

/// Sum of answers per constitution.
pub type RawScoreMap = BTreeMap<ConstitutionType, u32>;

/// Raw sums scaled to 0-100.
pub type PercentageScoreMap = BTreeMap<ConstitutionType, f64>;

/// Stateless scorer turning a 30-answer questionnaire into a constitution diagnosis.
///
/// The pipeline is sum, then normalize, then classify. Each stage is exposed so it can be
/// exercised on its own; external callers only need [`ConstitutionScorer::analyze`].
#[derive(Debug, Clone, Default)]
pub struct ConstitutionScorer {
    config: ScoringConfig,
}

impl ConstitutionScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Validate the answers and sum them per constitution.
    ///
    /// The answer count is checked before any individual rating; the first out-of-range rating
    /// in questionnaire order is reported.
    pub fn calculate_scores(&self, answers: &[i32]) -> Result<RawScoreMap, ValidationError> {
        rules::calculate_scores(answers)
    }

    /// Scale raw sums to percentages, clamped at 100. Works on partial maps.
    pub fn convert_to_percentage(&self, raw_scores: &RawScoreMap) -> PercentageScoreMap {
        rules::convert_to_percentage(raw_scores, &self.config)
    }

    /// Classify percentage scores into a primary and up to three secondary constitutions.
    pub fn determine_constitution(&self, scores: &PercentageScoreMap) -> ClassificationResult {
        policy::determine_constitution(scores, &self.config)
    }

    pub fn analyze(&self, answers: &[i32]) -> Result<ClassificationResult, ValidationError> {
        let raw_scores = self.calculate_scores(answers)?;
        let percentages = self.convert_to_percentage(&raw_scores);
        let result = self.determine_constitution(&percentages);

        debug!(
            primary = %result.primary_constitution,
            secondary = result.secondary_constitutions.len(),
            "classified questionnaire"
        );

        Ok(result)
    }
}

/// A secondary constitution with its display score rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryConstitution {
    #[serde(rename = "type")]
    pub kind: ConstitutionType,
    pub name: String,
    pub score: f64,
}

/// Final diagnosis for one questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub primary_constitution: ConstitutionType,
    pub primary_constitution_name: String,
    pub secondary_constitutions: Vec<SecondaryConstitution>,
    /// Unrounded percentage scores as given to the classifier.
    pub scores: PercentageScoreMap,
}

impl ClassificationResult {
    pub(crate) fn new(
        primary: ConstitutionType,
        secondary: Vec<SecondaryConstitution>,
        scores: PercentageScoreMap,
    ) -> Self {
        Self {
            primary_constitution: primary,
            primary_constitution_name: primary.display_name().to_string(),
            secondary_constitutions: secondary,
            scores,
        }
    }

    pub fn secondary_types(&self) -> Vec<ConstitutionType> {
        self.secondary_constitutions
            .iter()
            .map(|entry| entry.kind)
            .collect()
    }
}
