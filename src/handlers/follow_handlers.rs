use actix_web::{HttpResponse, get, web};

use crate::AppState;
use crate::dtos::ApiResponse;
use crate::errors::ApiError;
use crate::handlers::{PageQuery, redirect};
use crate::middleware::auth_extractor::AuthenticatedUser;
use crate::services::{follow_service, post_service};

/// The viewer's feed: posts by every author they follow.
#[get("/follow/")]
pub async fn follow_index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let page =
        post_service::list_followed_posts(&state.pg_pool, user.user_id, query.number()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("followed posts retrieved", page)))
}

/// Start following; lands back on the author's profile either way.
#[get("/{username}/follow/")]
pub async fn profile_follow(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    follow_service::follow(&state.pg_pool, user.user_id, &username).await?;
    Ok(redirect(&format!("/{}/", username)))
}

/// Stop following; removing nothing is fine.
#[get("/{username}/unfollow/")]
pub async fn profile_unfollow(
    state: web::Data<AppState>,
    path: web::Path<String>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let username = path.into_inner();
    follow_service::unfollow(&state.pg_pool, user.user_id, &username).await?;
    Ok(redirect(&format!("/{}/", username)))
}
