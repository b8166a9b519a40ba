use actix_web::{HttpResponse, post, web};

use crate::AppState;
use crate::dtos::ApiResponse;
use crate::dtos::form_dtos::CommentFormView;
use crate::errors::ApiError;
use crate::forms::CommentForm;
use crate::handlers::{post_detail_url, redirect};
use crate::middleware::auth_extractor::AuthenticatedUser;
use crate::services::comment_service;

/// Attach a comment to a post; success lands back on the detail view.
#[post("/{username}/{post_id}/comment/")]
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    user: AuthenticatedUser,
    body: web::Json<CommentForm>,
) -> Result<HttpResponse, ApiError> {
    let (username, post_id) = path.into_inner();
    let post_id: i64 = post_id.parse().map_err(|_| ApiError::NotFound("post"))?;
    let form = body.into_inner();

    let validated = match form.validate() {
        Ok(validated) => validated,
        Err(errors) => {
            let view = CommentFormView {
                text: form.text.clone(),
                errors,
            };
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error("validation failed", Some(view))));
        }
    };

    comment_service::add_comment(&state.pg_pool, user.user_id, &username, post_id, validated)
        .await?;
    Ok(redirect(&post_detail_url(&username, post_id)))
}
