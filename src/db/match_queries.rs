//! Query helpers for the matches table.

use std::collections::HashMap;

use sqlx::postgres::PgExecutor;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::models::matches::{CreateMatchRequest, Match, MatchWithTournament, UpdateMatchRequest};

pub async fn find<'e, E>(executor: E, match_id: Uuid) -> Result<Option<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>("SELECT * FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_optional(executor)
        .await
}

pub async fn list_by_tournament<'e, E>(
    executor: E,
    tournament_id: Uuid,
) -> Result<Vec<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        "SELECT * FROM matches WHERE tournament_id = $1 ORDER BY match_date ASC",
    )
    .bind(tournament_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e, E>(
    executor: E,
    request: &CreateMatchRequest,
) -> Result<Match, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        r#"
        INSERT INTO matches (id, tournament_id, team_a, team_b, match_date, stage, group_label)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.tournament_id)
    .bind(&request.team_a)
    .bind(&request.team_b)
    .bind(request.match_date)
    .bind(&request.stage)
    .bind(&request.group_label)
    .fetch_one(executor)
    .await
}

/// Update fixture fields only. Scores and the played flag go through the
/// result workflow, never through here.
pub async fn update_fixture<'e, E>(
    executor: E,
    match_id: Uuid,
    request: &UpdateMatchRequest,
) -> Result<Option<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET team_a = COALESCE($2, team_a),
            team_b = COALESCE($3, team_b),
            match_date = COALESCE($4, match_date),
            stage = COALESCE($5, stage),
            group_label = COALESCE($6, group_label),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(&request.team_a)
    .bind(&request.team_b)
    .bind(request.match_date)
    .bind(&request.stage)
    .bind(&request.group_label)
    .fetch_optional(executor)
    .await
}

/// Record the final score and mark the match played. Re-running with a
/// corrected score is the same statement.
pub async fn set_result<'e, E>(
    executor: E,
    match_id: Uuid,
    score_a: i32,
    score_b: i32,
) -> Result<Option<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        r#"
        UPDATE matches
        SET actual_score_a = $2,
            actual_score_b = $3,
            is_played = TRUE,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(match_id)
    .bind(score_a)
    .bind(score_b)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, match_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM matches WHERE id = $1")
        .bind(match_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

#[derive(Debug, FromRow)]
struct MatchTournamentRow {
    #[sqlx(flatten)]
    fixture: Match,
    tournament_name: Option<String>,
}

#[derive(Debug, FromRow)]
struct MatchLeaguePair {
    match_id: Uuid,
    league_id: Uuid,
}

/// All matches with their tournament name and associated league ids,
/// ordered by date.
pub async fn list_with_tournament(pool: &PgPool) -> Result<Vec<MatchWithTournament>, sqlx::Error> {
    let rows = sqlx::query_as::<_, MatchTournamentRow>(
        r#"
        SELECT m.*, t.name AS tournament_name
        FROM matches m
        LEFT JOIN tournaments t ON t.id = m.tournament_id
        ORDER BY m.match_date ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let pairs = sqlx::query_as::<_, MatchLeaguePair>("SELECT match_id, league_id FROM league_matches")
        .fetch_all(pool)
        .await?;

    let mut leagues_by_match: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    for pair in pairs {
        leagues_by_match
            .entry(pair.match_id)
            .or_default()
            .push(pair.league_id);
    }

    Ok(rows
        .into_iter()
        .map(|row| {
            let league_ids = leagues_by_match.remove(&row.fixture.id).unwrap_or_default();
            MatchWithTournament {
                fixture: row.fixture,
                tournament_name: row.tournament_name,
                league_ids,
            }
        })
        .collect())
}
