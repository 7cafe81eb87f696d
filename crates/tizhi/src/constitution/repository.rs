use super::domain::{ResultId, ResultRecord};

/// Storage abstraction so the result service can run against any backend.
pub trait ResultRepository: Send + Sync {
    fn insert(&self, record: ResultRecord) -> Result<ResultRecord, RepositoryError>;
    fn fetch(&self, id: &ResultId) -> Result<Option<ResultRecord>, RepositoryError>;
    /// Results stored for `user_id`, newest first, at most `limit` entries.
    fn for_user(&self, user_id: &str, limit: usize) -> Result<Vec<ResultRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
