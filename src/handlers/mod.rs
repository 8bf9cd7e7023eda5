pub mod admin;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod league_handler;
pub mod match_handler;
pub mod prediction_handler;
pub mod profile_handler;
pub mod ranking_handler;
pub mod registration_handler;

use actix_web::HttpResponse;

use crate::models::common::ApiResponse;
use crate::scoring::ProdeError;

/// Map a scoring error onto the HTTP response the caller can act on.
pub(crate) fn error_response(error: &ProdeError) -> HttpResponse {
    match error {
        ProdeError::InvalidScore(_) | ProdeError::InvalidInput(_) => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(error.to_string()))
        }
        ProdeError::MatchNotFound(_)
        | ProdeError::LeagueNotFound(_)
        | ProdeError::TournamentNotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(error.to_string()))
        }
        ProdeError::MatchAlreadyPlayed(_) => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(error.to_string()))
        }
        ProdeError::Database(e) => {
            tracing::error!("Database error: {:?}", e);
            HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Internal server error"))
        }
    }
}
