use actix_web::HttpResponse;
use common::model::validation::Issue;
use log::error;
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy for the API core.
///
/// Validation and not-found failures carry precise detail for the caller;
/// upload, database and serialization failures are reported opaquely and the
/// internal detail goes to the log instead of the response body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<Issue>),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("upload failed: {0}")]
    Upload(String),
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    pub fn to_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(issues) => HttpResponse::BadRequest().json(json!({
                "success": false,
                "message": "Validation failed",
                "errors": issues,
            })),
            ApiError::NotFound(entity) => HttpResponse::NotFound().json(json!({
                "success": false,
                "message": format!("{entity} not found"),
            })),
            ApiError::Upload(message) => {
                error!("Upload failed: {message}");
                HttpResponse::BadRequest().json(json!({
                    "success": false,
                    "message": message,
                }))
            }
            ApiError::Database(e) => {
                error!("Database error: {e}");
                HttpResponse::ServiceUnavailable().json(json!({
                    "success": false,
                    "message": "Server error",
                }))
            }
            ApiError::Serialization(e) => {
                error!("Serialization error: {e}");
                HttpResponse::ServiceUnavailable().json(json!({
                    "success": false,
                    "message": "Server error",
                }))
            }
        }
    }
}
