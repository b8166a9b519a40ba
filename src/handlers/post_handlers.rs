use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get, post, web};

use crate::AppState;
use crate::dtos::ApiResponse;
use crate::dtos::form_dtos::PostFormView;
use crate::dtos::post_dtos::PostOut;
use crate::errors::{ApiError, FieldError};
use crate::forms::PostForm;
use crate::handlers::{PageQuery, post_detail_url, redirect};
use crate::middleware::auth_extractor::AuthenticatedUser;
use crate::models::{Group, Post};
use crate::repositories::group_repository::GroupRepository;
use crate::repositories::post_repository::PostRepository;
use crate::services::post_service::{self, EditOutcome};

/// All posts, newest first. The rendered body is cached per page number and
/// replayed byte-identical until the TTL runs out.
#[get("/")]
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let cache_key = format!("index:page={}", query.number().unwrap_or(1));
    if let Some(body) = state.index_cache.get(&cache_key) {
        return Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body));
    }

    let page = post_service::list_all_posts(&state.pg_pool, query.number()).await?;
    let body = serde_json::to_vec(&ApiResponse::ok("posts retrieved", page))?;
    state.index_cache.put(&cache_key, body.clone());
    Ok(HttpResponse::Ok().content_type(ContentType::json()).body(body))
}

/// Posts of one group; unknown slugs are a 404.
#[get("/group/{slug}/")]
pub async fn group_posts(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let slug = path.into_inner();
    let listing = post_service::list_group_posts(&state.pg_pool, &slug, query.number()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("group posts retrieved", listing)))
}

async fn blank_form_view(state: &AppState) -> Result<PostFormView, ApiError> {
    let db = state.pg_pool.get().await?;
    let choices = GroupRepository::list(&db).await?;
    Ok(PostFormView {
        edit: false,
        fields: PostFormView::fields(),
        group_choices: choices.into_iter().map(Into::into).collect(),
        text: None,
        group: None,
        image: None,
        errors: Vec::new(),
        post: None,
    })
}

async fn rerender_form_view(
    state: &AppState,
    form: &PostForm,
    errors: Vec<FieldError>,
    edit: bool,
    post: Option<PostOut>,
) -> Result<PostFormView, ApiError> {
    let db = state.pg_pool.get().await?;
    let choices = GroupRepository::list(&db).await?;
    Ok(PostFormView {
        edit,
        fields: PostFormView::fields(),
        group_choices: choices.into_iter().map(Into::into).collect(),
        text: form.text.clone(),
        group: form.group,
        image: form.image.clone(),
        errors,
        post,
    })
}

/// The empty creation form.
#[get("/new/")]
pub async fn post_new_form(
    state: web::Data<AppState>,
    _user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let view = blank_form_view(&state).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("post form", view)))
}

/// Create a post. Validation failures re-render the form with the
/// submitted values; success lands back on the index.
#[post("/new/")]
pub async fn post_new(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    body: web::Json<PostForm>,
) -> Result<HttpResponse, ApiError> {
    let form = body.into_inner();
    let db = state.pg_pool.get().await?;
    let validated = match form.validate(&db).await? {
        Ok(validated) => validated,
        Err(errors) => {
            let view = rerender_form_view(&state, &form, errors, false, None).await?;
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error("validation failed", Some(view))));
        }
    };
    drop(db);

    post_service::create_post(&state.pg_pool, user.user_id, validated).await?;
    Ok(redirect("/"))
}

/// Detail view: the post, its author's aggregates, its comments.
#[get("/{username}/{post_id}/")]
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    user: Option<AuthenticatedUser>,
) -> Result<HttpResponse, ApiError> {
    let (username, post_id) = path.into_inner();
    let post_id: i64 = post_id.parse().map_err(|_| ApiError::NotFound("post"))?;
    let viewer = user.map(|u| u.user_id);
    let detail = post_service::get_post(&state.pg_pool, &username, post_id, viewer).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("post retrieved", detail)))
}

/// The edit form, prefilled. Only the author sees it; everyone else is
/// sent to the detail view as if nothing happened.
#[get("/{username}/{post_id}/edit/")]
pub async fn post_edit_form(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, ApiError> {
    let (username, post_id) = path.into_inner();
    let post_id: i64 = post_id.parse().map_err(|_| ApiError::NotFound("post"))?;

    let db = state.pg_pool.get().await?;
    let post = PostRepository::get_by_author_and_id(&db, &username, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    if post.author_id != user.user_id {
        return Ok(redirect(&post_detail_url(&username, post_id)));
    }
    let choices = GroupRepository::list(&db).await?;

    let view = prefilled_view(post, choices);
    Ok(HttpResponse::Ok().json(ApiResponse::ok("post form", view)))
}

fn prefilled_view(post: Post, choices: Vec<Group>) -> PostFormView {
    let out = PostOut::from(post);
    PostFormView {
        edit: true,
        fields: PostFormView::fields(),
        group_choices: choices.into_iter().map(Into::into).collect(),
        text: Some(out.text.clone()),
        group: out.group.as_ref().map(|g| g.id),
        image: out.image.clone(),
        errors: Vec::new(),
        post: Some(out),
    }
}

/// Edit a post. A non-author's submission is answered with the same
/// redirect a successful one gets; the post itself stays untouched.
#[post("/{username}/{post_id}/edit/")]
pub async fn post_edit(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    user: AuthenticatedUser,
    body: web::Json<PostForm>,
) -> Result<HttpResponse, ApiError> {
    let (username, post_id) = path.into_inner();
    let post_id: i64 = post_id.parse().map_err(|_| ApiError::NotFound("post"))?;
    let form = body.into_inner();

    let db = state.pg_pool.get().await?;
    let post = PostRepository::get_by_author_and_id(&db, &username, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;
    if post.author_id != user.user_id {
        return Ok(redirect(&post_detail_url(&username, post_id)));
    }

    let validated = match form.validate(&db).await? {
        Ok(validated) => validated,
        Err(errors) => {
            let current = Some(PostOut::from(post));
            let view = rerender_form_view(&state, &form, errors, true, current).await?;
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error("validation failed", Some(view))));
        }
    };
    drop(db);

    match post_service::edit_post(&state.pg_pool, user.user_id, &username, post_id, validated)
        .await?
    {
        EditOutcome::Updated(_) | EditOutcome::NotOwner => {
            Ok(redirect(&post_detail_url(&username, post_id)))
        }
    }
}
