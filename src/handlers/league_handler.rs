use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::league_queries;
use crate::handlers::error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::league::{CreateLeagueRequest, LeagueStandingsResponse};
use crate::scoring::validation::ScoreValidator;
use crate::scoring::StandingsService;

/// POST /leagues - create a league, the creator joins automatically
#[tracing::instrument(
    name = "Create league",
    skip(request, pool, claims),
    fields(
        league_name = %request.name,
        username = %claims.username
    )
)]
pub async fn create_league(
    request: web::Json<CreateLeagueRequest>,
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

    if let Err(e) = ScoreValidator::new().validate_league_name(&request.name) {
        return Ok(error_response(&e));
    }

    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!("Failed to start transaction: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create league")));
        }
    };

    let league = match league_queries::insert(&mut *tx, &request, user_id).await {
        Ok(league) => league,
        Err(e) => {
            tracing::error!("Failed to insert league: {}", e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to create league")));
        }
    };

    if let Err(e) = league_queries::add_participant(&mut *tx, league.id, user_id).await {
        tracing::error!("Failed to add league creator as participant: {}", e);
        return Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to create league")));
    }

    if let Err(e) = tx.commit().await {
        tracing::error!("Failed to commit league creation: {}", e);
        return Ok(HttpResponse::InternalServerError()
            .json(ApiResponse::<()>::error("Failed to create league")));
    }

    tracing::info!("Created league {} ({})", league.name, league.id);
    Ok(HttpResponse::Ok().json(ApiResponse::success("League created successfully", league)))
}

/// POST /leagues/{id}/join - join by league id (the shareable code)
#[tracing::instrument(name = "Join league", skip(pool, claims), fields(username = %claims.username))]
pub async fn join_league(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error("Invalid user token"))
            )
        }
    };

    let league = match league_queries::find(pool.get_ref(), league_id).await {
        Ok(Some(league)) => league,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("League not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch league {}: {}", league_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to join league")));
        }
    };

    match league_queries::add_participant(pool.get_ref(), league_id, user_id).await {
        Ok(0) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
            "Already a member of {}",
            league.name
        )))),
        Ok(_) => {
            tracing::info!("User {} joined league {}", user_id, league_id);
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message(format!(
                "Joined {}",
                league.name
            ))))
        }
        Err(e) => {
            tracing::error!("Failed to join league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to join league")))
        }
    }
}

/// GET /leagues - all leagues with participant counts
#[tracing::instrument(name = "List leagues", skip(pool))]
pub async fn list_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match league_queries::list_with_counts(pool.get_ref()).await {
        Ok(leagues) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} leagues", leagues.len()),
            leagues,
        ))),
        Err(e) => {
            tracing::error!("Failed to list leagues: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve leagues")))
        }
    }
}

/// GET /leagues/{id}
#[tracing::instrument(name = "Get league", skip(pool))]
pub async fn get_league(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let league_id = path.into_inner();

    match league_queries::find(pool.get_ref(), league_id).await {
        Ok(Some(league)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("League retrieved successfully", league))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("League not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch league {}: {}", league_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve league")))
        }
    }
}

/// GET /leagues/{id}/standings - leaderboard recomputed on every view
#[tracing::instrument(name = "Get league standings", skip(pool))]
pub async fn get_league_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let league_id = path.into_inner();

    let league = match league_queries::find(pool.get_ref(), league_id).await {
        Ok(Some(league)) => league,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("League not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch league {}: {}", league_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve standings")));
        }
    };

    let standings_service = StandingsService::new(pool.get_ref().clone());

    match standings_service.recompute_league_standings(league_id).await {
        Ok(standings) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            "League standings retrieved successfully",
            LeagueStandingsResponse { league, standings },
        ))),
        Err(e) => {
            tracing::error!("Failed to compute standings for league {}: {}", league_id, e);
            Ok(error_response(&e))
        }
    }
}
