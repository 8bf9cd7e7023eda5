use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::team_queries;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::team::{CreateTeamRequest, UpdateTeamRequest};

/// GET /admin/teams
#[tracing::instrument(name = "List teams", skip(pool))]
pub async fn list_teams(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match team_queries::list(pool.get_ref()).await {
        Ok(teams) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} teams", teams.len()),
            teams,
        ))),
        Err(e) => {
            tracing::error!("Failed to list teams: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve teams")))
        }
    }
}

/// POST /admin/teams
#[tracing::instrument(
    name = "Create team",
    skip(request, pool, claims),
    fields(
        team_name = %request.name,
        admin_user = %claims.username
    )
)]
pub async fn create_team(
    request: web::Json<CreateTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.name.trim().is_empty() {
        return Ok(
            HttpResponse::BadRequest().json(ApiResponse::<()>::error("Team name cannot be empty"))
        );
    }

    match team_queries::insert(pool.get_ref(), &request).await {
        Ok(team) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Team created successfully", team))),
        Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
            Ok(HttpResponse::Conflict()
                .json(ApiResponse::<()>::error("A team with this name already exists")))
        }
        Err(e) => {
            tracing::error!("Failed to insert team: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create team")))
        }
    }
}

/// PATCH /admin/teams/{id}
#[tracing::instrument(name = "Update team", skip(request, pool, claims), fields(admin_user = %claims.username))]
pub async fn update_team(
    path: web::Path<Uuid>,
    request: web::Json<UpdateTeamRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match team_queries::update(pool.get_ref(), team_id, &request).await {
        Ok(Some(team)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Team updated successfully", team))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found"))),
        Err(e) => {
            tracing::error!("Failed to update team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update team")))
        }
    }
}

/// DELETE /admin/teams/{id}
#[tracing::instrument(name = "Delete team", skip(pool, claims), fields(admin_user = %claims.username))]
pub async fn delete_team(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let team_id = path.into_inner();

    match team_queries::delete(pool.get_ref(), team_id).await {
        Ok(0) => Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Team not found"))),
        Ok(_) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_message("Team deleted successfully"))),
        Err(e) => {
            tracing::error!("Failed to delete team {}: {}", team_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to delete team")))
        }
    }
}
