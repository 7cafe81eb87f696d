use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tizhi::constitution::{RepositoryError, ResultId, ResultRecord, ResultRepository};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local result store; results are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryResultRepository {
    records: Arc<Mutex<HashMap<ResultId, ResultRecord>>>,
}

impl InMemoryResultRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, HashMap<ResultId, ResultRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("result store lock poisoned".to_string()))
    }
}

impl ResultRepository for InMemoryResultRepository {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.result_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.result_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn for_user(&self, user_id: &str, limit: usize) -> Result<Vec<ResultRecord>, RepositoryError> {
        let guard = self.lock()?;
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
