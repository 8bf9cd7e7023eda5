// src/models/league.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LeagueType {
    Public,
    Private,
}

impl LeagueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeagueType::Public => "public",
            LeagueType::Private => "private",
        }
    }
}

impl From<String> for LeagueType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "private" => LeagueType::Private,
            _ => LeagueType::Public,
        }
    }
}

impl fmt::Display for LeagueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct League {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub league_type: LeagueType,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

// Request/Response DTOs
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub description: Option<String>,
    pub league_type: LeagueType,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueWithParticipants {
    #[serde(flatten)]
    pub league: League,
    pub participant_count: i64,
}

/// One row of a league-scoped leaderboard. Rank is 1-based; ties keep
/// roster order (stable sort, no further tie-break rule).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LeagueStandingEntry {
    pub participant_id: Uuid,
    pub username: String,
    pub league_points: i32,
    pub rank: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueStandingsResponse {
    pub league: League,
    pub standings: Vec<LeagueStandingEntry>,
}
