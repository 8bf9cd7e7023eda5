// src/routes/predictions.rs
use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::prediction_handler;
use crate::middleware::auth::Claims;
use crate::models::prediction::SavePredictionRequest;

/// Save (or overwrite) the caller's prediction for a match
#[post("")]
async fn save_prediction(
    request: web::Json<SavePredictionRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    prediction_handler::save_prediction(request, pool, claims).await
}

/// List the caller's predictions with scored status
#[get("/mine")]
async fn my_predictions(
    pool: web::Data<PgPool>,
    claims: web::ReqData<Claims>,
) -> Result<HttpResponse> {
    prediction_handler::my_predictions(pool, claims).await
}
