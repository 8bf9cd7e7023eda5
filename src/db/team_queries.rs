//! Query helpers for the teams table.

use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::models::team::{CreateTeamRequest, Team, UpdateTeamRequest};

pub async fn find<'e, E>(executor: E, team_id: Uuid) -> Result<Option<Team>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Team>("SELECT * FROM teams WHERE id = $1")
        .bind(team_id)
        .fetch_optional(executor)
        .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<Team>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Team>("SELECT * FROM teams ORDER BY name ASC")
        .fetch_all(executor)
        .await
}

pub async fn insert<'e, E>(executor: E, request: &CreateTeamRequest) -> Result<Team, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Team>(
        r#"
        INSERT INTO teams (id, name, team_type, logo_url, country)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(request.name.trim())
    .bind(request.team_type)
    .bind(&request.logo_url)
    .bind(&request.country)
    .fetch_one(executor)
    .await
}

pub async fn update<'e, E>(
    executor: E,
    team_id: Uuid,
    request: &UpdateTeamRequest,
) -> Result<Option<Team>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, Team>(
        r#"
        UPDATE teams
        SET name = COALESCE($2, name),
            team_type = COALESCE($3, team_type),
            logo_url = COALESCE($4, logo_url),
            country = COALESCE($5, country)
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(team_id)
    .bind(&request.name)
    .bind(request.team_type)
    .bind(&request.logo_url)
    .bind(&request.country)
    .fetch_optional(executor)
    .await
}

pub async fn delete<'e, E>(executor: E, team_id: Uuid) -> Result<u64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM teams WHERE id = $1")
        .bind(team_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}
