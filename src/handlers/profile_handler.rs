use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::user_queries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::user::UpdateProfileRequest;

/// GET /profile - the caller's own profile
#[tracing::instrument(name = "Get profile", skip(pool, claims), fields(username = %claims.username))]
pub async fn get_profile(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid user token"))
            )
        }
    };

    match user_queries::find_profile(pool.get_ref(), user_id).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Profile retrieved successfully", profile))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found"))),
        Err(e) => {
            tracing::error!("Failed to fetch profile for {}: {}", user_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve profile")))
        }
    }
}

/// PATCH /profile - update display name, avatar or favorite team
#[tracing::instrument(name = "Update profile", skip(request, pool, claims), fields(username = %claims.username))]
pub async fn update_profile(
    request: web::Json<UpdateProfileRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid user token"))
            )
        }
    };

    match user_queries::update_profile(pool.get_ref(), user_id, &request).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Profile updated successfully", profile))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found"))),
        Err(e) => {
            tracing::error!("Failed to update profile for {}: {}", user_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update profile")))
        }
    }
}
