pub mod comment_dtos;
pub mod form_dtos;
pub mod post_dtos;
pub mod profile_dtos;

use serde::Serialize;

/// Response envelope used by every JSON endpoint.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: &str, data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: &str, data: Option<T>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.to_string(),
            data,
        }
    }
}
