use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::domain::common::ValidationErrors;
use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

/// Ошибки обработчиков API
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Commerce API responded with {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Upstream {
        status: u16,
        message: Option<String>,
    },

    #[error("Commerce API unreachable: {0}")]
    Transport(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream { .. } | ApiError::Transport(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the user; upstream messages are passed through as-is
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Validation(_) => "Please correct the highlighted fields".to_string(),
            ApiError::NotFound(what) => format!("{what} not found"),
            ApiError::Upstream {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Upstream { message: None, .. } => "Commerce API request failed".to_string(),
            ApiError::Transport(_) => "Commerce API is unavailable".to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Internal(format!("Unexpected commerce API response: {e}"))
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::warn!("{}", self);
        }

        let message = self.user_message();
        let body = match self {
            ApiError::Validation(errors) => ApiErrorBody::with_field_errors(message, errors.0),
            _ => ApiErrorBody::new(message),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation(ValidationErrors::new()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::NotFound("Product".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Upstream {
                status: 400,
                message: Some("Invalid rule".into())
            }
            .status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_upstream_message_is_passed_through() {
        let err = ApiError::Upstream {
            status: 400,
            message: Some("Rule with this reference already exists".into()),
        };
        assert_eq!(err.user_message(), "Rule with this reference already exists");
    }

    #[test]
    fn test_upstream_without_message_uses_generic_text() {
        let err = ApiError::Upstream {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(), "Commerce API request failed");
    }

    #[test]
    fn test_validation_response_status() {
        let mut errors = ValidationErrors::new();
        errors.push("seller", "Seller is required for this rule type");
        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
