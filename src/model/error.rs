use thiserror::Error;

use crate::model::ResourceType;

pub type DatabaseResult<T> = std::result::Result<T, DatabaseError>;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("sqlx migrate error: {0}")]
    SqlxMigrateError(#[from] sqlx::migrate::MigrateError),
    #[error("sqlx error: {0}")]
    SqlxError(#[from] sqlx::Error),
    #[error("{resource_type:?} `{id}` not found")]
    NotFound {
        resource_type: ResourceType,
        id: String,
    },
    #[error("storage error: {0}")]
    StorageError(String),
}

impl DatabaseError {
    pub fn not_found<S: Into<String>>(resource_type: ResourceType, id: S) -> Self {
        Self::NotFound {
            resource_type,
            id: id.into(),
        }
    }
}
