use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

use crate::common::utils::{make_authenticated_request, register_and_login, TestApp, TestUser};

/// Create a user carrying the admin role and log it in.
pub async fn create_admin(app: &TestApp) -> TestUser {
    register_and_login(app, "admin").await
}

/// Create a regular user and log it in.
pub async fn create_user(app: &TestApp) -> TestUser {
    register_and_login(app, "user").await
}

/// Create a fixture via the admin API and return its id.
pub async fn create_match(app: &TestApp, admin_token: &str, team_a: &str, team_b: &str) -> Uuid {
    create_match_in_leagues(app, admin_token, team_a, team_b, &[]).await
}

/// Create a fixture scoped to the given leagues.
pub async fn create_match_in_leagues(
    app: &TestApp,
    admin_token: &str,
    team_a: &str,
    team_b: &str,
    league_ids: &[Uuid],
) -> Uuid {
    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/matches", app.address),
        admin_token,
        Some(json!({
            "team_a": team_a,
            "team_b": team_b,
            "match_date": "2026-06-11T18:00:00Z",
            "league_ids": league_ids,
        })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("No match id in response")
}

/// Create a tournament via the admin API and return its id.
pub async fn create_tournament(app: &TestApp, admin_token: &str, name: &str) -> Uuid {
    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/tournaments", app.address),
        admin_token,
        Some(json!({
            "name": name,
            "year": 2026,
        })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("No tournament id in response")
}

/// Create a league and return its id. The creator joins automatically.
pub async fn create_league(app: &TestApp, token: &str, name: &str) -> Uuid {
    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/leagues", app.address),
        token,
        Some(json!({
            "name": name,
            "league_type": "private",
        })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("No league id in response")
}

pub async fn join_league(app: &TestApp, token: &str, league_id: Uuid) {
    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/leagues/{}/join", app.address, league_id),
        token,
        None,
    )
    .await;
    assert_eq!(200, response.status().as_u16());
}

/// Submit a prediction; the caller asserts on the response.
pub async fn save_prediction(
    app: &TestApp,
    token: &str,
    match_id: Uuid,
    score_a: i32,
    score_b: i32,
) -> reqwest::Response {
    let client = Client::new();
    make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/predictions", app.address),
        token,
        Some(json!({
            "match_id": match_id,
            "score_a": score_a,
            "score_b": score_b,
        })),
    )
    .await
}

/// Post (or correct) a match result; the caller asserts on the response.
pub async fn set_match_result(
    app: &TestApp,
    admin_token: &str,
    match_id: Uuid,
    score_a: i32,
    score_b: i32,
) -> reqwest::Response {
    let client = Client::new();
    make_authenticated_request(
        &client,
        reqwest::Method::PUT,
        &format!("{}/admin/matches/{}/result", app.address, match_id),
        admin_token,
        Some(json!({
            "score_a": score_a,
            "score_b": score_b,
        })),
    )
    .await
}

/// Read the persisted total straight from the database.
pub async fn total_points(app: &TestApp, user_id: Uuid) -> i32 {
    sqlx::query_scalar("SELECT total_points FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to read total points")
}

/// Read the persisted points of one prediction, None while unscored.
pub async fn prediction_points(app: &TestApp, match_id: Uuid, user_id: Uuid) -> Option<i32> {
    sqlx::query_scalar("SELECT points FROM predictions WHERE match_id = $1 AND user_id = $2")
        .bind(match_id)
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to read prediction points")
}

/// Count the prediction rows a user holds for a match.
pub async fn prediction_count(app: &TestApp, match_id: Uuid, user_id: Uuid) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM predictions WHERE match_id = $1 AND user_id = $2")
        .bind(match_id)
        .bind(user_id)
        .fetch_one(&app.db_pool)
        .await
        .expect("Failed to count predictions")
}
