//! Query helpers for the users table.

use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::models::user::{RankingEntry, UpdateProfileRequest, User, UserProfile, UserRole};

pub async fn find<'e, E>(executor: E, user_id: Uuid) -> Result<Option<User>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(executor)
        .await
}

pub async fn find_by_username<'e, E>(
    executor: E,
    username: &str,
) -> Result<Option<User>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(executor)
        .await
}

pub async fn find_profile<'e, E>(
    executor: E,
    user_id: Uuid,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, email, role, avatar_url, favorite_team, total_points, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

pub async fn count<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
        .fetch_one(executor)
        .await
}

/// Overwrite the derived total. Only the scoring workflows call this.
pub async fn update_total_points<'e, E>(
    executor: E,
    user_id: Uuid,
    total: i32,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query("UPDATE users SET total_points = $2, updated_at = NOW() WHERE id = $1")
        .bind(user_id)
        .bind(total)
        .execute(executor)
        .await?;
    Ok(())
}

/// Global ranking, best first. Ties share points and are ordered by name so
/// the output is deterministic.
pub async fn ranking<'e, E>(executor: E) -> Result<Vec<RankingEntry>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, RankingEntry>(
        r#"
        SELECT username, avatar_url, total_points
        FROM users
        ORDER BY total_points DESC, username ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_profiles<'e, E>(executor: E) -> Result<Vec<UserProfile>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT id, username, email, role, avatar_url, favorite_team, total_points, created_at
        FROM users
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn set_role<'e, E>(
    executor: E,
    user_id: Uuid,
    role: UserRole,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserProfile>(
        r#"
        UPDATE users SET role = $2, updated_at = NOW()
        WHERE id = $1
        RETURNING id, username, email, role, avatar_url, favorite_team, total_points, created_at
        "#,
    )
    .bind(user_id)
    .bind(role)
    .fetch_optional(executor)
    .await
}

pub async fn update_profile<'e, E>(
    executor: E,
    user_id: Uuid,
    request: &UpdateProfileRequest,
) -> Result<Option<UserProfile>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, UserProfile>(
        r#"
        UPDATE users
        SET username = COALESCE($2, username),
            avatar_url = COALESCE($3, avatar_url),
            favorite_team = COALESCE($4, favorite_team),
            updated_at = NOW()
        WHERE id = $1
        RETURNING id, username, email, role, avatar_url, favorite_team, total_points, created_at
        "#,
    )
    .bind(user_id)
    .bind(&request.username)
    .bind(&request.avatar_url)
    .bind(&request.favorite_team)
    .fetch_optional(executor)
    .await
}
