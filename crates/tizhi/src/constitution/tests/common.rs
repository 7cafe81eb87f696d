use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::constitution::domain::{ResultId, ResultRecord, TestSubmission};
use crate::constitution::repository::{RepositoryError, ResultRepository};
use crate::constitution::scoring::{ConstitutionScorer, PercentageScoreMap};
use crate::constitution::types::ConstitutionType;
use crate::constitution::{constitution_router, ConstitutionService};

pub(super) fn scorer() -> ConstitutionScorer {
    ConstitutionScorer::default()
}

pub(super) fn uniform_answers(value: i32) -> Vec<i32> {
    vec![value; 30]
}

/// Answers where the 1-based question range `block` is set to `high` and the rest to `rest`.
pub(super) fn block_answers(block: std::ops::RangeInclusive<usize>, high: i32, rest: i32) -> Vec<i32> {
    (1..=30)
        .map(|number| if block.contains(&number) { high } else { rest })
        .collect()
}

pub(super) fn scores(entries: &[(ConstitutionType, f64)]) -> PercentageScoreMap {
    entries.iter().copied().collect()
}

/// Full nine-type map with every type at `base` except the listed overrides.
pub(super) fn scores_with(base: f64, overrides: &[(ConstitutionType, f64)]) -> PercentageScoreMap {
    let mut map: PercentageScoreMap = ConstitutionType::ALL
        .into_iter()
        .map(|kind| (kind, base))
        .collect();
    for (kind, score) in overrides {
        map.insert(*kind, *score);
    }
    map
}

pub(super) fn submission_for(user_id: &str, answers: Vec<i32>) -> TestSubmission {
    TestSubmission {
        answers,
        user_id: Some(user_id.to_string()),
        anonymous_id: None,
        device_id: Some("device-17".to_string()),
        platform: Some("h5".to_string()),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ResultId, ResultRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("repository mutex poisoned").len()
    }
}

impl ResultRepository for MemoryRepository {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.result_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.result_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn for_user(&self, user_id: &str, limit: usize) -> Result<Vec<ResultRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<ResultRecord> = guard
            .values()
            .filter(|record| record.user_id.as_deref() == Some(user_id))
            .cloned()
            .collect();
        records.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| right.result_id.0.cmp(&left.result_id.0))
        });
        records.truncate(limit);
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl ResultRepository for UnavailableRepository {
    fn insert(&self, _record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn for_user(&self, _user_id: &str, _limit: usize) -> Result<Vec<ResultRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn build_service() -> (ConstitutionService<MemoryRepository>, MemoryRepository) {
    let repository = MemoryRepository::default();
    let service = ConstitutionService::new(Arc::new(repository.clone()), scorer());
    (service, repository)
}

pub(super) fn router_with_service(service: ConstitutionService<MemoryRepository>) -> axum::Router {
    constitution_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
