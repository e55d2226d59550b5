use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use user_lib::errors_service::UserServiceError;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Rendered as a bare 404; the message only goes to the log.
    NotFound(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    pub fn invalid_id(raw: &str) -> Self {
        ApiError::BadRequest(format!("invalid user id: {raw}"))
    }

    pub fn missing_field(field: &str) -> Self {
        ApiError::BadRequest(format!("{field} is required"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::NotFound(msg) => {
                tracing::debug!(reason = %msg, "responding not found");
                return StatusCode::NOT_FOUND.into_response();
            }
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message: Some(message),
        };

        (status, Json(body)).into_response()
    }
}

impl From<UserServiceError> for ApiError {
    fn from(err: UserServiceError) -> Self {
        match err {
            UserServiceError::NotFound(id) => ApiError::NotFound(format!("user {id} not found")),
            UserServiceError::Internal(err) => ApiError::Internal(err.to_string()),
            _ => ApiError::Internal("unexpected error".to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        // Body limit violations surface here when the client sent no
        // Content-Length and the limit tripped while reading.
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return ApiError::PayloadTooLarge(rejection.body_text());
        }

        let message = match rejection {
            JsonRejection::JsonDataError(e) => format!("invalid request body: {}", e.body_text()),
            JsonRejection::JsonSyntaxError(_) => "invalid JSON format".to_string(),
            JsonRejection::MissingJsonContentType(_) => "JSON content type required".to_string(),
            JsonRejection::BytesRejection(_) => "invalid request body".to_string(),
            other => other.body_text(),
        };
        ApiError::BadRequest(message)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let reasons: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{field}: {}", reasons.join(", "))
            })
            .collect();
        fields.sort();
        ApiError::BadRequest(fields.join("; "))
    }
}

/// Check if environment is production-like (prod, prod01, prod02, etc.)
pub fn is_prod_like(env: &str) -> bool {
    env.to_lowercase().starts_with("prod")
}

/// Converts a service error to an ApiError, logging internal errors.
/// In production, internal error details are hidden.
pub fn handle_service_error(err: UserServiceError, env: &str, operation: &str) -> ApiError {
    if err.is_not_found() {
        return ApiError::from(err);
    }

    tracing::error!(env = %env, error = ?err, operation = %operation, "service error");
    if is_prod_like(env) {
        ApiError::Internal("internal server error".to_string())
    } else {
        ApiError::from(err)
    }
}
