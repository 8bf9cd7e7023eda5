use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{match_queries, tournament_queries};
use crate::handlers::error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::tournament::CreateTournamentRequest;
use crate::scoring::ResultService;

/// POST /admin/tournaments
#[tracing::instrument(
    name = "Create tournament",
    skip(request, pool, claims),
    fields(
        tournament_name = %request.name,
        admin_user = %claims.username
    )
)]
pub async fn create_tournament(
    request: web::Json<CreateTournamentRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::<()>::error("Tournament name cannot be empty")));
    }

    match tournament_queries::insert(pool.get_ref(), &request).await {
        Ok(tournament) => {
            tracing::info!("Created tournament {} ({})", tournament.name, tournament.id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success("Tournament created successfully", tournament)))
        }
        Err(e) => {
            tracing::error!("Failed to insert tournament: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create tournament")))
        }
    }
}

/// GET /admin/tournaments
#[tracing::instrument(name = "List tournaments", skip(pool))]
pub async fn list_tournaments(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match tournament_queries::list(pool.get_ref()).await {
        Ok(tournaments) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} tournaments", tournaments.len()),
            tournaments,
        ))),
        Err(e) => {
            tracing::error!("Failed to list tournaments: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve tournaments")))
        }
    }
}

/// GET /admin/tournaments/{id}/matches
#[tracing::instrument(name = "List tournament matches", skip(pool))]
pub async fn list_tournament_matches(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();

    match match_queries::list_by_tournament(pool.get_ref(), tournament_id).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} matches", matches.len()),
            matches,
        ))),
        Err(e) => {
            tracing::error!("Failed to list matches for tournament {}: {}", tournament_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve matches")))
        }
    }
}

/// DELETE /admin/tournaments/{id} - cascades through matches and predictions
#[tracing::instrument(name = "Delete tournament", skip(pool, claims), fields(admin_user = %claims.username))]
pub async fn delete_tournament(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let tournament_id = path.into_inner();

    let service = ResultService::new(pool.get_ref().clone());

    match service.delete_tournament(tournament_id).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_message("Tournament deleted successfully"))),
        Err(e) => {
            tracing::error!("Failed to delete tournament {}: {}", tournament_id, e);
            Ok(error_response(&e))
        }
    }
}
