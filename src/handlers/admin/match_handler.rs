//! Admin match management: fixtures are created and edited here, and this
//! is where results enter the system.

use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{league_queries, match_queries};
use crate::handlers::error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::matches::{CreateMatchRequest, MatchResultRequest, UpdateMatchRequest};
use crate::scoring::validation::ScoreValidator;
use crate::scoring::ResultService;

/// POST /admin/matches - create a fixture, optionally scoped to leagues
#[tracing::instrument(
    name = "Create match",
    skip(request, pool, claims),
    fields(
        team_a = %request.team_a,
        team_b = %request.team_b,
        admin_user = %claims.username
    )
)]
pub async fn create_match(
    request: web::Json<CreateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    if let Err(e) = ScoreValidator::new().validate_fixture_teams(&request.team_a, &request.team_b)
    {
        return Ok(error_response(&e));
    }

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!("Failed to start transaction: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create match")));
        }
    };

    let fixture = match match_queries::create(&mut *tx, &request).await {
        Ok(fixture) => fixture,
        Err(e) => {
            tracing::error!("Failed to insert match: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create match")));
        }
    };

    for league_id in request.league_ids.clone().unwrap_or_default() {
        if let Err(e) = league_queries::attach_match(&mut *tx, league_id, fixture.id).await {
            tracing::error!("Failed to attach match to league {}: {}", league_id, e);
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::<()>::error("Unknown league in league_ids")));
        }
    }

    if let Err(e) = tx.commit().await {
        tracing::error!("Failed to commit match creation: {}", e);
        return Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to create match")));
    }

    tracing::info!("Created match {} vs {} ({})", fixture.team_a, fixture.team_b, fixture.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success("Match created successfully", fixture)))
}

/// PATCH /admin/matches/{id} - edit fixture fields; scores never change here
#[tracing::instrument(name = "Update match", skip(request, pool, claims), fields(admin_user = %claims.username))]
pub async fn update_match(
    path: web::Path<Uuid>,
    request: web::Json<UpdateMatchRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    match match_queries::update_fixture(pool.get_ref(), match_id, &request).await {
        Ok(Some(fixture)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Match updated successfully", fixture))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found")))
        }
        Err(e) => {
            tracing::error!("Failed to update match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to update match")))
        }
    }
}

/// PUT /admin/matches/{id}/result - post or correct the final score
#[tracing::instrument(
    name = "Set match result",
    skip(request, pool, claims),
    fields(
        match_id = %path,
        admin_user = %claims.username
    )
)]
pub async fn set_match_result(
    path: web::Path<Uuid>,
    request: web::Json<MatchResultRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    tracing::info!(
        "Setting result for match {}: {} - {} by admin {}",
        match_id,
        request.score_a,
        request.score_b,
        claims.username
    );

    let service = ResultService::new(pool.get_ref().clone());

    match service
        .set_match_result(match_id, request.score_a, request.score_b)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_message("Match result recorded successfully"))),
        Err(e) => {
            tracing::error!("Failed to set result for match {}: {}", match_id, e);
            Ok(error_response(&e))
        }
    }
}

/// DELETE /admin/matches/{id}
#[tracing::instrument(name = "Delete match", skip(pool, claims), fields(admin_user = %claims.username))]
pub async fn delete_match(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    let service = ResultService::new(pool.get_ref().clone());

    match service.delete_match(match_id).await {
        Ok(()) => Ok(HttpResponse::Ok()
            .json(ApiResponse::<()>::success_message("Match deleted successfully"))),
        Err(e) => {
            tracing::error!("Failed to delete match {}: {}", match_id, e);
            Ok(error_response(&e))
        }
    }
}
