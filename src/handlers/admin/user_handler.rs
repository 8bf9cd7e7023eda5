use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_queries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::user::UpdateUserRoleRequest;

/// GET /admin/users
#[tracing::instrument(name = "List users", skip(pool, claims), fields(admin_user = %claims.username))]
pub async fn list_users(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    match user_queries::list_profiles(pool.get_ref()).await {
        Ok(users) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} users", users.len()),
            users,
        ))),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve users")))
        }
    }
}

/// PATCH /admin/users/{id}/role - grant or revoke the admin role
#[tracing::instrument(name = "Update user role", skip(request, pool, claims), fields(admin_user = %claims.username))]
pub async fn update_user_role(
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRoleRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    // Admins cannot change their own role
    if claims.user_id() == Some(user_id) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Cannot change your own role")));
    }

    match user_queries::set_role(pool.get_ref(), user_id, request.role).await {
        Ok(Some(profile)) => {
            tracing::info!("Changed role of user {} to {}", user_id, request.role);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success("User role updated successfully", profile)))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("User not found"))),
        Err(e) => {
            tracing::error!("Failed to update role for user {}: {}", user_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update user role")))
        }
    }
}
