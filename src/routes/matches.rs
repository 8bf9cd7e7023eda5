// src/routes/matches.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::handlers::match_handler;

/// List all matches with tournament and league context
#[get("")]
async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::list_matches(pool).await
}

/// Get a single match by id
#[get("/{match_id}")]
async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match_handler::get_match(path, pool).await
}
