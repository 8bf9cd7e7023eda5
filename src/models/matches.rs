// src/models/matches.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::rule::Scoreline;

/// A fixture between two named teams. Scores are present only once played.
#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Match {
    pub id: Uuid,
    pub tournament_id: Option<Uuid>,
    pub team_a: String,
    pub team_b: String,
    pub match_date: DateTime<Utc>,
    pub stage: Option<String>,
    pub group_label: Option<String>,
    pub actual_score_a: Option<i32>,
    pub actual_score_b: Option<i32>,
    pub is_played: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Match {
    /// Final score, available only when the match has been played.
    pub fn result(&self) -> Option<Scoreline> {
        if !self.is_played {
            return None;
        }
        match (self.actual_score_a, self.actual_score_b) {
            (Some(a), Some(b)) => Some(Scoreline::new(a, b)),
            _ => None,
        }
    }
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateMatchRequest {
    pub tournament_id: Option<Uuid>,
    pub team_a: String,
    pub team_b: String,
    pub match_date: DateTime<Utc>,
    pub stage: Option<String>,
    pub group_label: Option<String>,
    /// Leagues whose scoped leaderboard should count this match.
    pub league_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateMatchRequest {
    pub team_a: Option<String>,
    pub team_b: Option<String>,
    pub match_date: Option<DateTime<Utc>>,
    pub stage: Option<String>,
    pub group_label: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResultRequest {
    pub score_a: i32,
    pub score_b: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchWithTournament {
    #[serde(flatten)]
    pub fixture: Match,
    pub tournament_name: Option<String>,
    pub league_ids: Vec<Uuid>,
}
