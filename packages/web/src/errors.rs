use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use services::validation::input_validator::ValidationErrors;
use std::fmt;

/// Request-scoped failures. Authorization refusals are not here on purpose:
/// those leave as redirects, never as error statuses.
#[derive(Debug)]
pub enum WebError {
    NotFound,
    Validation(ValidationErrors),
    Db(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::NotFound => f.write_str("not found"),
            WebError::Validation(errors) => {
                let messages: Vec<&str> = errors
                    .values()
                    .flatten()
                    .map(String::as_str)
                    .collect();
                f.write_str(&messages.join(", "))
            }
            WebError::Db(message) => f.write_str(message),
        }
    }
}

impl ResponseError for WebError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebError::NotFound => StatusCode::NOT_FOUND,
            WebError::Validation(_) => StatusCode::BAD_REQUEST,
            WebError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            WebError::NotFound => {
                HttpResponse::NotFound().json(json!({ "error": "not found" }))
            }
            WebError::Validation(errors) => {
                HttpResponse::BadRequest().json(json!({ "errors": errors }))
            }
            WebError::Db(message) => {
                tracing::error!(%message, "request failed");
                HttpResponse::InternalServerError()
                    .json(json!({ "error": "internal error" }))
            }
        }
    }
}

impl From<sea_orm::DbErr> for WebError {
    fn from(e: sea_orm::DbErr) -> Self {
        WebError::Db(e.to_string())
    }
}

/// Single-field validation failure, for errors raised past form validation
/// (the slug unique index, the email unique index).
pub fn field_error(field: &str, message: String) -> WebError {
    let mut errors = ValidationErrors::new();
    errors.entry(field.to_string()).or_default().push(message);
    WebError::Validation(errors)
}
