use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::user_queries;
use crate::models::common::ApiResponse;

/// GET /ranking - global standings by total points
#[tracing::instrument(name = "Get global ranking", skip(pool))]
pub async fn get_ranking(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match user_queries::ranking(pool.get_ref()).await {
        Ok(entries) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} ranked users", entries.len()),
            entries,
        ))),
        Err(e) => {
            tracing::error!("Failed to fetch ranking: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve ranking")))
        }
    }
}
