// src/models/prediction.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::rule::{PredictionStatus, Scoreline};

/// One user's forecast for one match. `points` stays NULL until the match
/// is played and the scoring workflow writes it.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Prediction {
    pub id: Uuid,
    pub match_id: Uuid,
    pub user_id: Uuid,
    pub predicted_score_a: i32,
    pub predicted_score_b: i32,
    pub points: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Prediction {
    pub fn scoreline(&self) -> Scoreline {
        Scoreline::new(self.predicted_score_a, self.predicted_score_b)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SavePredictionRequest {
    pub match_id: Uuid,
    pub score_a: i32,
    pub score_b: i32,
}

/// A prediction joined with its match, as shown on the points detail screen.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictionWithMatch {
    pub match_id: Uuid,
    pub team_a: String,
    pub team_b: String,
    pub match_date: DateTime<Utc>,
    pub is_played: bool,
    pub actual_score_a: Option<i32>,
    pub actual_score_b: Option<i32>,
    pub predicted_score_a: i32,
    pub predicted_score_b: i32,
    pub points: i32,
    pub status: PredictionStatus,
}
