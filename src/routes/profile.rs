// src/routes/profile.rs
use actix_web::{get, patch, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::profile_handler;
use crate::middleware::auth::Claims;
use crate::models::user::UpdateProfileRequest;

/// Get the caller's profile
#[get("")]
async fn get_profile(pool: web::Data<PgPool>, claims: web::ReqData<Claims>) -> Result<HttpResponse> {
    profile_handler::get_profile(pool, claims).await
}

/// Update the caller's profile
#[patch("")]
async fn update_profile(
    request: web::Json<UpdateProfileRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    profile_handler::update_profile(request, pool, claims).await
}
