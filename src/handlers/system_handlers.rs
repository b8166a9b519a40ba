use actix_web::{HttpRequest, HttpResponse, get, web};
use serde_json::json;

use crate::AppState;
use crate::db;
use crate::dtos::ApiResponse;
use crate::errors::ApiError;

/// Liveness plus a database round trip.
#[get("/healthz")]
pub async fn healthz(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    db::ping(&state.pg_pool).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok("ok", json!({ "database": "up" }))))
}

/// Fallback for unknown paths: a 404 that names the path it missed.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error(
        "page not found",
        Some(json!({ "path": req.path() })),
    ))
}
