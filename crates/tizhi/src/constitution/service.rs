use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{ResultId, ResultRecord, TestSubmission};
use super::repository::{RepositoryError, ResultRepository};
use super::scoring::{ConstitutionScorer, ValidationError};

/// Service composing the scorer with result storage.
pub struct ConstitutionService<R> {
    scorer: Arc<ConstitutionScorer>,
    repository: Arc<R>,
}

static RESULT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_result_id() -> ResultId {
    let id = RESULT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ResultId(format!("res-{id:06}"))
}

impl<R> ConstitutionService<R>
where
    R: ResultRepository + 'static,
{
    pub fn new(repository: Arc<R>, scorer: ConstitutionScorer) -> Self {
        Self {
            scorer: Arc::new(scorer),
            repository,
        }
    }

    pub fn scorer(&self) -> &ConstitutionScorer {
        &self.scorer
    }

    /// Score a submission and persist the result. Invalid answers are rejected before anything
    /// is stored.
    pub fn submit(&self, submission: TestSubmission) -> Result<ResultRecord, ResultServiceError> {
        let classification = self.scorer.analyze(&submission.answers)?;

        let record = ResultRecord {
            result_id: next_result_id(),
            user_id: submission.user_id,
            platform: submission.platform,
            answers: submission.answers,
            classification,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            result_id = stored.result_id.as_str(),
            primary = %stored.classification.primary_constitution,
            "stored constitution result"
        );
        Ok(stored)
    }

    pub fn get(&self, result_id: &ResultId) -> Result<ResultRecord, ResultServiceError> {
        let record = self
            .repository
            .fetch(result_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn history(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<ResultRecord>, ResultServiceError> {
        Ok(self.repository.for_user(user_id, limit)?)
    }
}

/// Error raised by the result service.
#[derive(Debug, thiserror::Error)]
pub enum ResultServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
