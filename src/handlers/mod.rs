pub mod comment_handlers;
pub mod follow_handlers;
pub mod post_handlers;
pub mod profile_handlers;
pub mod system_handlers;

use actix_web::HttpResponse;
use actix_web::http::header;
use serde::Deserialize;

/// `?page=N` on every listing endpoint. Anything that does not parse as a
/// number is treated like an absent parameter, which the paginator turns
/// into page one.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn number(&self) -> Option<i64> {
        self.page.as_deref().and_then(|p| p.parse().ok())
    }
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.to_string()))
        .finish()
}

pub(crate) fn post_detail_url(username: &str, post_id: i64) -> String {
    format!("/{}/{}/", username, post_id)
}
