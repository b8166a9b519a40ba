pub mod cache;
pub mod config;
pub mod db;
pub mod dtos;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod repositories;
pub mod services;

use std::time::Duration;

use actix_web::web;
use deadpool_postgres::Pool;

use crate::cache::PageCache;

pub struct AppState {
    pub pg_pool: Pool,
    pub login_url: String,
    pub index_cache: PageCache,
}

impl AppState {
    pub fn new(pg_pool: Pool) -> Self {
        Self {
            pg_pool,
            login_url: config::login_url(),
            index_cache: PageCache::new(Duration::from_secs(config::cache_ttl_secs())),
        }
    }
}

/// Route table, shared by the binary and the integration tests. Literal
/// routes go first: `/{username}/…` would swallow `/new/`, `/follow/` and
/// `/group/…` if it were registered ahead of them.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::system_handlers::healthz)
        .service(handlers::post_handlers::index) // GET /
        .service(handlers::post_handlers::post_new_form) // GET /new/
        .service(handlers::post_handlers::post_new) // POST /new/
        .service(handlers::follow_handlers::follow_index) // GET /follow/
        .service(handlers::post_handlers::group_posts) // GET /group/{slug}/
        .service(handlers::follow_handlers::profile_follow) // GET /{username}/follow/
        .service(handlers::follow_handlers::profile_unfollow) // GET /{username}/unfollow/
        .service(handlers::post_handlers::post_edit_form) // GET /{username}/{post_id}/edit/
        .service(handlers::post_handlers::post_edit) // POST /{username}/{post_id}/edit/
        .service(handlers::comment_handlers::add_comment) // POST /{username}/{post_id}/comment/
        .service(handlers::post_handlers::post_detail) // GET /{username}/{post_id}/
        .service(handlers::profile_handlers::profile) // GET /{username}/
        .default_service(web::route().to(handlers::system_handlers::not_found));
}
