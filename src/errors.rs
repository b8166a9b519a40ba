use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use serde::Serialize;
use thiserror::Error;

/// One field that failed validation, with a message suitable for display
/// next to the field.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error("database error: {0}")]
    Db(#[from] tokio_postgres::Error),
    #[error("pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    status: String,
    message: String,
    data: Option<serde_json::Value>,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Db(_) | ApiError::Pool(_) | ApiError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::NotFound(what) => ErrorBody {
                status: "error".to_string(),
                message: format!("{} not found", what),
                data: None,
            },
            ApiError::Validation(fields) => ErrorBody {
                status: "error".to_string(),
                message: "validation failed".to_string(),
                data: serde_json::to_value(fields).ok(),
            },
            // Log the cause, answer a generic body: internals never reach
            // the client.
            ApiError::Db(e) => {
                error!("database error: {}", e);
                ErrorBody {
                    status: "error".to_string(),
                    message: "internal server error".to_string(),
                    data: None,
                }
            }
            ApiError::Pool(e) => {
                error!("pool error: {}", e);
                ErrorBody {
                    status: "error".to_string(),
                    message: "internal server error".to_string(),
                    data: None,
                }
            }
            ApiError::Serialization(e) => {
                error!("serialization error: {}", e);
                ErrorBody {
                    status: "error".to_string(),
                    message: "internal server error".to_string(),
                    data: None,
                }
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(ApiError::NotFound("post").status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let err = ApiError::Validation(vec![FieldError::new("text", "Text is required")]);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn error_response_carries_the_status() {
        let resp = ApiError::NotFound("group").error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
