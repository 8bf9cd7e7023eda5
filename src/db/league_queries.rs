//! Query helpers for leagues, their rosters and their match scope.

use chrono::{DateTime, Utc};
use sqlx::postgres::PgExecutor;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::league::{CreateLeagueRequest, League, LeagueWithParticipants};
use crate::models::matches::Match;

pub async fn find<'e, E>(executor: E, league_id: Uuid) -> Result<Option<League>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, League>("SELECT * FROM leagues WHERE id = $1")
        .bind(league_id)
        .fetch_optional(executor)
        .await
}

pub async fn insert<'e, E>(
    executor: E,
    request: &CreateLeagueRequest,
    created_by: Uuid,
) -> Result<League, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, League>(
        r#"
        INSERT INTO leagues (id, name, description, league_type, created_by)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(&request.description)
    .bind(request.league_type)
    .bind(created_by)
    .fetch_one(executor)
    .await
}

/// Add a user to the roster. Joining twice is a no-op.
pub async fn add_participant<'e, E>(
    executor: E,
    league_id: Uuid,
    user_id: Uuid,
) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO league_participants (league_id, user_id)
        VALUES ($1, $2)
        ON CONFLICT (league_id, user_id) DO NOTHING
        "#,
    )
    .bind(league_id)
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn is_participant<'e, E>(
    executor: E,
    league_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM league_participants WHERE league_id = $1 AND user_id = $2)",
    )
    .bind(league_id)
    .bind(user_id)
    .fetch_one(executor)
    .await
}

pub async fn list_with_counts<'e, E>(
    executor: E,
) -> Result<Vec<LeagueWithParticipants>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    #[derive(FromRow)]
    struct Row {
        #[sqlx(flatten)]
        league: League,
        participant_count: i64,
    }

    let rows = sqlx::query_as::<_, Row>(
        r#"
        SELECT l.*, COUNT(lp.user_id) AS participant_count
        FROM leagues l
        LEFT JOIN league_participants lp ON lp.league_id = l.id
        GROUP BY l.id
        ORDER BY l.created_at DESC
        "#,
    )
    .fetch_all(executor)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| LeagueWithParticipants {
            league: row.league,
            participant_count: row.participant_count,
        })
        .collect())
}

/// One roster member with the display name used on the leaderboard.
#[derive(Debug, FromRow)]
pub struct ParticipantRow {
    pub user_id: Uuid,
    pub username: String,
    pub joined_at: DateTime<Utc>,
}

/// Roster in join order. League standings rely on this order being stable.
pub async fn participants<'e, E>(
    executor: E,
    league_id: Uuid,
) -> Result<Vec<ParticipantRow>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, ParticipantRow>(
        r#"
        SELECT lp.user_id, u.username, lp.joined_at
        FROM league_participants lp
        JOIN users u ON u.id = lp.user_id
        WHERE lp.league_id = $1
        ORDER BY lp.joined_at ASC, u.username ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}

/// Matches scoped to the league that already have a result.
pub async fn played_matches_for_league<'e, E>(
    executor: E,
    league_id: Uuid,
) -> Result<Vec<Match>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Match>(
        r#"
        SELECT m.*
        FROM matches m
        JOIN league_matches lm ON lm.match_id = m.id
        WHERE lm.league_id = $1 AND m.is_played = TRUE
        ORDER BY m.match_date ASC
        "#,
    )
    .bind(league_id)
    .fetch_all(executor)
    .await
}

pub async fn attach_match<'e, E>(
    executor: E,
    league_id: Uuid,
    match_id: Uuid,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query(
        r#"
        INSERT INTO league_matches (league_id, match_id)
        VALUES ($1, $2)
        ON CONFLICT (league_id, match_id) DO NOTHING
        "#,
    )
    .bind(league_id)
    .bind(match_id)
    .execute(executor)
    .await?;
    Ok(())
}
