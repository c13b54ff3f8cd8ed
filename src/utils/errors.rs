use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use taskpad_auth::{AuthError, PasswordError};
use tracing::{debug, error, warn};

/// Application-level error.
///
/// Each variant keeps the internal detail for logs while the HTTP response
/// carries only a generic, non-leaky message. Auth rejections in particular
/// all collapse to the same 401 body; the precise reason goes to tracing.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error(transparent)]
    Credential(PasswordError),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<PasswordError> for AppError {
    fn from(err: PasswordError) -> Self {
        match err {
            // A wrong password is a normal login outcome, not a fault.
            PasswordError::Mismatch => AppError::InvalidCredentials,
            other => AppError::Credential(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Auth(AuthError::Encoding(reason)) => {
                error!(%reason, "token issuance failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Auth(reason) => {
                warn!(%reason, "request rejected by auth gate");
                (
                    StatusCode::UNAUTHORIZED,
                    "authentication required".to_string(),
                )
            }
            AppError::InvalidCredentials => {
                debug!("credential mismatch");
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            AppError::Credential(PasswordError::MalformedHash) => {
                error!("stored credential hash is malformed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            AppError::Credential(reason) => {
                error!(%reason, "credential hashing failed");
                (
                    StatusCode::BAD_REQUEST,
                    "unable to process credentials".to_string(),
                )
            }
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Validation(message) => (StatusCode::UNPROCESSABLE_ENTITY, message.clone()),
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal(err) => {
                error!(error = format!("{err:#}"), "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_unauthorized() {
        for err in [
            AuthError::MissingAuth,
            AuthError::BadHeaderFormat,
            AuthError::EmptyToken,
            AuthError::InvalidSignature,
            AuthError::MalformedToken,
            AuthError::TokenExpired,
        ] {
            let response = AppError::Auth(err).into_response();
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_token_encoding_failure_is_internal() {
        let response = AppError::Auth(AuthError::Encoding("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_credential_mismatch_is_bad_request() {
        let err: AppError = PasswordError::Mismatch.into();
        assert!(matches!(err, AppError::InvalidCredentials));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_malformed_hash_is_internal() {
        let err: AppError = PasswordError::MalformedHash.into();
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_passthrough() {
        let response = AppError::NotFound("task not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
