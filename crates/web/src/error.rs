use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use meet::error::MeetError;
use serde_json::json;
use std::fmt;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Meet(MeetError),
    Validation(ValidationErrors),
    Unauthorized,
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meet(e) => write!(f, "Meet error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Unauthorized => write!(f, "Unauthorized"),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Meet(MeetError::EntryNotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Meet(MeetError::DuplicateEntry(_) | MeetError::ConstraintViolation(_)) => {
                StatusCode::CONFLICT
            }
            Self::Meet(MeetError::InvalidTimeFormat(_)) => StatusCode::BAD_REQUEST,
            Self::Meet(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
        };

        let body = match &self {
            Self::Meet(e) if status_code.is_server_error() => {
                tracing::error!("Meet error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Meet(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::Unauthorized => {
                json!({
                    "error": "Unauthorized"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<MeetError> for WebError {
    fn from(error: MeetError) -> Self {
        Self::Meet(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}
