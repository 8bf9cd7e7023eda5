//! Query helpers for the predictions table.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgExecutor;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::prediction::Prediction;
use crate::scoring::rule::Scoreline;

pub async fn list_by_match<'e, E>(
    executor: E,
    match_id: Uuid,
) -> Result<Vec<Prediction>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Prediction>(
        "SELECT * FROM predictions WHERE match_id = $1 ORDER BY created_at ASC",
    )
    .bind(match_id)
    .fetch_all(executor)
    .await
}

/// Create or overwrite the prediction for `(match_id, user_id)`. The points
/// column is untouched; only the scoring workflow writes it.
pub async fn upsert<'e, E>(
    executor: E,
    match_id: Uuid,
    user_id: Uuid,
    score_a: i32,
    score_b: i32,
) -> Result<Prediction, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Prediction>(
        r#"
        INSERT INTO predictions (id, match_id, user_id, predicted_score_a, predicted_score_b)
        VALUES ($1, $2, $3, $4, $5)
        ON CONFLICT (match_id, user_id) DO UPDATE SET
            predicted_score_a = EXCLUDED.predicted_score_a,
            predicted_score_b = EXCLUDED.predicted_score_b,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(match_id)
    .bind(user_id)
    .bind(score_a)
    .bind(score_b)
    .fetch_one(executor)
    .await
}

pub async fn update_points<'e, E>(
    executor: E,
    prediction_id: Uuid,
    points: i32,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE predictions SET points = $2, updated_at = NOW() WHERE id = $1")
        .bind(prediction_id)
        .bind(points)
        .execute(executor)
        .await?;
    Ok(())
}

/// Distinct users holding a prediction on this match.
pub async fn user_ids_for_match<'e, E>(
    executor: E,
    match_id: Uuid,
) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, Uuid>("SELECT DISTINCT user_id FROM predictions WHERE match_id = $1")
        .bind(match_id)
        .fetch_all(executor)
        .await
}

/// Distinct users holding a prediction on any match of this tournament.
pub async fn user_ids_for_tournament<'e, E>(
    executor: E,
    tournament_id: Uuid,
) -> Result<Vec<Uuid>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT DISTINCT p.user_id
        FROM predictions p
        JOIN matches m ON m.id = p.match_id
        WHERE m.tournament_id = $1
        "#,
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

pub async fn delete_by_match<'e, E>(executor: E, match_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM predictions WHERE match_id = $1")
        .bind(match_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// A prediction joined with the scores of its match, enough to replay the
/// scoring rule. The inner join keeps dangling predictions out of any
/// recomputation.
#[derive(Debug, FromRow)]
pub struct PredictionMatchRow {
    pub match_id: Uuid,
    pub team_a: String,
    pub team_b: String,
    pub match_date: DateTime<Utc>,
    pub is_played: bool,
    pub actual_score_a: Option<i32>,
    pub actual_score_b: Option<i32>,
    pub predicted_score_a: i32,
    pub predicted_score_b: i32,
    pub points: Option<i32>,
}

impl PredictionMatchRow {
    pub fn predicted(&self) -> Scoreline {
        Scoreline::new(self.predicted_score_a, self.predicted_score_b)
    }

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

pub async fn list_by_user_with_matches<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Vec<PredictionMatchRow>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, PredictionMatchRow>(
        r#"
        SELECT
            p.match_id,
            m.team_a,
            m.team_b,
            m.match_date,
            m.is_played,
            m.actual_score_a,
            m.actual_score_b,
            p.predicted_score_a,
            p.predicted_score_b,
            p.points
        FROM predictions p
        JOIN matches m ON m.id = p.match_id
        WHERE p.user_id = $1
        ORDER BY m.match_date ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// All predictions placed on matches scoped to a league.
pub async fn list_for_league_matches<'e, E>(
    executor: E,
    league_id: Uuid,
) -> Result<Vec<Prediction>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Prediction>(
        r#"
        SELECT p.*
        FROM predictions p
        JOIN league_matches lm ON lm.match_id = p.match_id
        WHERE lm.league_id = $1
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}
