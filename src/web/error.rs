use axum::{Json, http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::{
    error::log_error,
    model::{DatabaseError, ResourceType},
};

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("ResourceNotFound: {resource_type:?}")]
    ResourceNotFound { resource_type: ResourceType },

    #[error("ResourceReorderError: {resource_type:?}. Error: {error}")]
    ResourceReorderError {
        resource_type: ResourceType,
        error: DatabaseError,
    },

    #[error("ResourceReorderBadPayload: {resource_type:?}. Reason: {reason}")]
    ResourceReorderBadPayload {
        resource_type: ResourceType,
        reason: String,
    },

    #[error("ResourceDeleteError: {resource_type:?}. Error: {error}")]
    ResourceDeleteError {
        resource_type: ResourceType,
        error: DatabaseError,
    },

    #[error("ResourceFetchError: {resource_type:?}. Error: {error}")]
    ResourceFetchError {
        resource_type: ResourceType,
        error: DatabaseError,
    },

    #[error("ResourceListError: {resource_type:?}. Error: {error}")]
    ResourceListError {
        resource_type: ResourceType,
        error: DatabaseError,
    },
}

impl ResourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            Self::ResourceReorderError { .. }
            | Self::ResourceReorderBadPayload { .. }
            | Self::ResourceDeleteError { .. }
            | Self::ResourceFetchError { .. }
            | Self::ResourceListError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceNotFound { resource_type } => {
                let name = resource_type.singular();
                let mut chars = name.chars();
                match chars.next() {
                    Some(first) => format!("{}{} not found", first.to_uppercase(), chars.as_str()),
                    None => String::from("Not found"),
                }
            }
            Self::ResourceReorderError { resource_type, .. }
            | Self::ResourceReorderBadPayload { resource_type, .. } => {
                format!("Failed to reorder {}", resource_type.plural())
            }
            Self::ResourceDeleteError { resource_type, .. } => {
                format!("Failed to delete {}", resource_type.singular())
            }
            Self::ResourceFetchError { resource_type, .. } => {
                format!("Failed to fetch {}", resource_type.singular())
            }
            Self::ResourceListError { resource_type, .. } => {
                format!("Failed to fetch {}", resource_type.plural())
            }
        }
    }

    /// Delete failures are reported to the client only.
    pub fn is_logged(&self) -> bool {
        !matches!(self, Self::ResourceDeleteError { .. })
    }
}

#[derive(Debug, Error)]
pub enum WebError {
    #[error("ResourceError - {0}")]
    ResourceError(#[from] ResourceError),
}

impl WebError {
    pub fn resource_not_found(r#type: ResourceType) -> Self {
        Self::ResourceError(ResourceError::ResourceNotFound {
            resource_type: r#type,
        })
    }

    pub fn reorder_error(r#type: ResourceType, error: DatabaseError) -> Self {
        Self::ResourceError(ResourceError::ResourceReorderError {
            resource_type: r#type,
            error,
        })
    }

    pub fn reorder_bad_payload<S: Into<String>>(r#type: ResourceType, reason: S) -> Self {
        Self::ResourceError(ResourceError::ResourceReorderBadPayload {
            resource_type: r#type,
            reason: reason.into(),
        })
    }

    pub fn delete_error(r#type: ResourceType, error: DatabaseError) -> Self {
        Self::ResourceError(ResourceError::ResourceDeleteError {
            resource_type: r#type,
            error,
        })
    }

    pub fn fetch_error(r#type: ResourceType, error: DatabaseError) -> Self {
        Self::ResourceError(ResourceError::ResourceFetchError {
            resource_type: r#type,
            error,
        })
    }

    pub fn list_error(r#type: ResourceType, error: DatabaseError) -> Self {
        Self::ResourceError(ResourceError::ResourceListError {
            resource_type: r#type,
            error,
        })
    }

    pub fn status_code(&self) -> axum::http::StatusCode {
        match self {
            Self::ResourceError(e) => e.status_code(),
        }
    }

    pub fn client_display(&self) -> String {
        match self {
            Self::ResourceError(e) => e.client_display(),
        }
    }

    pub fn is_logged(&self) -> bool {
        match self {
            Self::ResourceError(e) => e.is_logged(),
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    /// Fixed, human-readable message for the client
    pub error: String,
}

impl IntoResponse for WebError {
    fn into_response(self) -> axum::response::Response {
        if self.is_logged() {
            log_error(&self);
        }

        let status_code = self.status_code();
        let body = ErrorResponse {
            error: self.client_display(),
        };

        (status_code, Json(body)).into_response()
    }
}
