// src/routes/leagues.rs
use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::league_handler;
use crate::middleware::auth::Claims;
use crate::models::league::CreateLeagueRequest;

/// Create a new league
#[post("")]
async fn create_league(
    request: web::Json<CreateLeagueRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    league_handler::create_league(request, pool, claims).await
}

/// List all leagues
#[get("")]
async fn list_leagues(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    league_handler::list_leagues(pool).await
}

/// Join a league using its id as the invite code
#[post("/{league_id}/join")]
async fn join_league(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    league_handler::join_league(path, pool, claims).await
}

/// League-scoped leaderboard
#[get("/{league_id}/standings")]
async fn get_league_standings(
    path: web::Path<Uuid>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    league_handler::get_league_standings(path, pool).await
}

/// League details
#[get("/{league_id}")]
async fn get_league(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    league_handler::get_league(path, pool).await
}
