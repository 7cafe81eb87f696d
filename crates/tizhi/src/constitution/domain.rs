use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::scoring::{ClassificationResult, PercentageScoreMap, SecondaryConstitution};
use super::types::ConstitutionType;

/// Identifier assigned to a stored questionnaire result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl ResultId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Questionnaire answers submitted by a client, with optional caller metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestSubmission {
    pub answers: Vec<i32>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub anonymous_id: Option<String>,
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub platform: Option<String>,
}

impl TestSubmission {
    pub fn anonymous(answers: Vec<i32>) -> Self {
        Self {
            answers,
            user_id: None,
            anonymous_id: None,
            device_id: None,
            platform: None,
        }
    }
}

/// A scored submission as kept by the result repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub result_id: ResultId,
    pub user_id: Option<String>,
    pub platform: Option<String>,
    pub answers: Vec<i32>,
    pub classification: ClassificationResult,
    pub created_at: DateTime<Utc>,
}

impl ResultRecord {
    pub fn report_url(&self) -> String {
        format!("/api/v1/result/{}", self.result_id.as_str())
    }

    pub fn submit_view(&self) -> SubmitResultView {
        let classification = self.classification.clone();
        SubmitResultView {
            result_id: self.result_id.clone(),
            primary_constitution: classification.primary_constitution,
            primary_constitution_name: classification.primary_constitution_name,
            secondary_constitutions: classification.secondary_constitutions,
            scores: classification.scores,
            report_url: self.report_url(),
        }
    }

    pub fn summary_view(&self) -> ResultSummaryView {
        ResultSummaryView {
            result_id: self.result_id.clone(),
            primary_constitution: self.classification.primary_constitution,
            primary_constitution_name: self.classification.primary_constitution_name.clone(),
            secondary: self.classification.secondary_types(),
            created_at: self.created_at,
        }
    }
}

/// Response body for a freshly scored questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResultView {
    pub result_id: ResultId,
    pub primary_constitution: ConstitutionType,
    pub primary_constitution_name: String,
    pub secondary_constitutions: Vec<SecondaryConstitution>,
    pub scores: PercentageScoreMap,
    pub report_url: String,
}

/// Condensed entry for a user's result history.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummaryView {
    pub result_id: ResultId,
    pub primary_constitution: ConstitutionType,
    pub primary_constitution_name: String,
    pub secondary: Vec<ConstitutionType>,
    pub created_at: DateTime<Utc>,
}
