use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::match_queries;
use crate::models::common::ApiResponse;

/// GET /matches - list every fixture with tournament and league context
#[tracing::instrument(name = "List matches", skip(pool))]
pub async fn list_matches(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    match match_queries::list_with_tournament(pool.get_ref()).await {
        Ok(matches) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            format!("Retrieved {} matches", matches.len()),
            matches,
        ))),
        Err(e) => {
            tracing::error!("Failed to list matches: {}", e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve matches")))
        }
    }
}

/// GET /matches/{id}
#[tracing::instrument(name = "Get match", skip(pool), fields(match_id = %path))]
pub async fn get_match(path: web::Path<Uuid>, pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let match_id = path.into_inner();

    match match_queries::find(pool.get_ref(), match_id).await {
        Ok(Some(fixture)) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Match retrieved successfully", fixture))),
        Ok(None) => {
            Ok(HttpResponse::NotFound().json(ApiResponse::<()>::error("Match not found")))
        }
        Err(e) => {
            tracing::error!("Failed to fetch match {}: {}", match_id, e);
            Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve match")))
        }
    }
}
