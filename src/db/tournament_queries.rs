//! Query helpers for the tournaments table.

use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::models::tournament::{CreateTournamentRequest, Tournament};

pub async fn find<'e, E>(
    executor: E,
    tournament_id: Uuid,
) -> Result<Option<Tournament>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments WHERE id = $1")
        .bind(tournament_id)
        .fetch_optional(executor)
        .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<Tournament>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Tournament>("SELECT * FROM tournaments ORDER BY year DESC, created_at DESC")
        .fetch_all(executor)
        .await
}

pub async fn insert<'e, E>(
    executor: E,
    request: &CreateTournamentRequest,
) -> Result<Tournament, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Tournament>(
        r#"
        INSERT INTO tournaments (id, name, year, team_type)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&request.name)
    .bind(request.year)
    .bind(&request.team_type)
    .fetch_one(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, tournament_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
        .bind(tournament_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
