// src/routes/ranking.rs
use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::ranking_handler;

/// Global ranking ordered by total points
#[get("")]
async fn global_ranking(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    ranking_handler::get_ranking(pool).await
}
