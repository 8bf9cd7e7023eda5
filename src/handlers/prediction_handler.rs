use actix_web::{web, HttpResponse, Result};
use sqlx::PgPool;

use crate::db::prediction_queries;
use crate::handlers::error_response;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;
use crate::models::prediction::{PredictionWithMatch, SavePredictionRequest};
use crate::scoring::rule;
use crate::scoring::ResultService;

/// POST /predictions - create or overwrite the caller's forecast for a match
#[tracing::instrument(
    name = "Save prediction",
    skip(request, pool, claims),
    fields(
        match_id = %request.match_id,
        username = %claims.username
    )
)]
pub async fn save_prediction(
    request: web::Json<SavePredictionRequest>,
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

    let service = ResultService::new(pool.get_ref().clone());

    match service
        .save_prediction(request.match_id, user_id, request.score_a, request.score_b)
        .await
    {
        Ok(prediction) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success("Prediction saved successfully", prediction))),
        Err(e) => {
            tracing::info!("Rejected prediction for match {}: {}", request.match_id, e);
            Ok(error_response(&e))
        }
    }
}

/// GET /predictions/mine - the caller's predictions with their scored status
#[tracing::instrument(name = "Get own predictions", skip(pool, claims), fields(username = %claims.username))]
pub async fn my_predictions(
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

    let rows = match prediction_queries::list_by_user_with_matches(pool.get_ref(), user_id).await {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Failed to fetch predictions for user {}: {}", user_id, e);
            return Ok(HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Failed to retrieve predictions")));
        }
    };

    let predictions: Vec<PredictionWithMatch> = rows
        .into_iter()
        .map(|row| {
            let outcome = rule::score_prediction(Some(row.predicted()), row.result());
            PredictionWithMatch {
                match_id: row.match_id,
                team_a: row.team_a,
                team_b: row.team_b,
                match_date: row.match_date,
                is_played: row.is_played,
                actual_score_a: row.actual_score_a,
                actual_score_b: row.actual_score_b,
                predicted_score_a: row.predicted_score_a,
                predicted_score_b: row.predicted_score_b,
                points: outcome.points,
                status: outcome.status,
            }
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        format!("Retrieved {} predictions", predictions.len()),
        predictions,
    )))
}
