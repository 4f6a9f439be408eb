use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Application error taxonomy.
///
/// Every failure this service can surface maps to exactly one variant, so
/// callers (and tests) can match on the kind while the HTTP layer only sees
/// a status code and an `{"error": ...}` body. `Internal` and `Database`
/// carry their source for the logs but render a generic message outward.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("user already exists")]
    CredentialConflict,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("missing token")]
    NoToken,

    #[error("invalid token format")]
    MalformedToken,

    #[error("token has expired")]
    ExpiredToken,

    #[error("invalid token")]
    InvalidToken,

    #[error("role not found in context")]
    RoleNotBound,

    #[error("access denied")]
    AccessDenied,

    #[error("mutation attempted without an authenticated actor")]
    ActorPropagationFailure,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("internal server error")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::CredentialConflict => StatusCode::CONFLICT,
            Self::InvalidCredentials
            | Self::NoToken
            | Self::MalformedToken
            | Self::ExpiredToken
            | Self::InvalidToken => StatusCode::UNAUTHORIZED,
            Self::RoleNotBound | Self::AccessDenied => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ActorPropagationFailure | Self::Internal(_) | Self::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // The outward message never includes storage details; the source
        // error only reaches the logs.
        match &self {
            Self::Internal(source) => error!(%source, "internal error"),
            Self::Database(source) => error!(%source, "database error"),
            Self::ActorPropagationFailure => error!("{}", self),
            _ => warn!(status = %status.as_u16(), "{}", self),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AppError::CredentialConflict.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AppError::NoToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::MalformedToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::ExpiredToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::InvalidToken.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::RoleNotBound.status(), StatusCode::FORBIDDEN);
        assert_eq!(AppError::AccessDenied.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            AppError::ActorPropagationFailure.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_error_message_is_generic() {
        let err = AppError::Internal(anyhow::anyhow!("connection refused to 10.0.0.5:5432"));
        assert_eq!(err.to_string(), "internal server error");
    }

    #[test]
    fn test_database_error_message_is_generic() {
        let err = AppError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), "internal server error");
    }
}
