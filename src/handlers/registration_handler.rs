use actix_web::{web, HttpResponse};
use chrono::Utc;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_queries;
use crate::models::common::ApiResponse;
use crate::models::user::{RegistrationRequest, UserRole};
use crate::utils::password::hash_password;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>,
) -> HttpResponse {
    match insert_user(&user_form, &pool).await {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(e) if e.as_database_error().is_some_and(|db| db.is_unique_violation()) => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(
                "Username or email is already taken",
            ))
        }
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

pub async fn insert_user(
    user_form: &web::Json<RegistrationRequest>,
    pool: &PgPool,
) -> Result<(), sqlx::Error> {
    let user_id = Uuid::new_v4();

    let mut tx = pool.begin().await?;

    // The very first account bootstraps the admin role
    let role = if user_queries::count(&mut *tx).await? == 0 {
        UserRole::Admin
    } else {
        UserRole::User
    };

    sqlx::query(
        r#"
        INSERT INTO users (id, username, password_hash, email, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(user_id)
    .bind(&user_form.username)
    .bind(hash_password(user_form.password.expose_secret()))
    .bind(&user_form.email)
    .bind(role)
    .bind(Utc::now())
    .bind(Utc::now())
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute user insert query: {:?}", e);
        e
    })?;

    tx.commit().await?;
    Ok(())
}
