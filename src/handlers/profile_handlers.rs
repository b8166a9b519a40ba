use actix_web::{HttpResponse, get, web};

use crate::AppState;
use crate::dtos::ApiResponse;
use crate::errors::ApiError;
use crate::handlers::PageQuery;
use crate::middleware::auth_extractor::AuthenticatedUser;
use crate::services::post_service;

/// Author profile: their posts plus post/follower/following counts and
/// whether the viewer already follows them.
#[get("/{username}/")]
pub async fn profile(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    user: Option<AuthenticatedUser>,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    let viewer = user.map(|u| u.user_id);
    let listing =
        post_service::list_author_posts(&state.pg_pool, &username, viewer, query.number()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("profile retrieved", listing)))
}
