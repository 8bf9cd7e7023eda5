// src/models/team.rs
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "varchar", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TeamType {
    Club,
    National,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::Club => "club",
            TeamType::National => "national",
        }
    }
}

impl From<String> for TeamType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "national" => TeamType::National,
            _ => TeamType::Club,
        }
    }
}

impl fmt::Display for TeamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub team_type: TeamType,
    pub logo_url: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateTeamRequest {
    pub name: String,
    pub team_type: TeamType,
    pub logo_url: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UpdateTeamRequest {
    pub name: Option<String>,
    pub team_type: Option<TeamType>,
    pub logo_url: Option<String>,
    pub country: Option<String>,
}
