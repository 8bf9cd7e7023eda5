//! Global ranking and the admin user-management surface.

use reqwest::Client;
use serde_json::json;

mod common;
use common::prode_helpers::{
    create_admin, create_match, create_user, save_prediction, set_match_result,
};
use common::utils::{make_authenticated_request, register_and_login, spawn_app};

#[tokio::test]
async fn ranking_orders_users_by_total_points() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let leader = create_user(&test_app).await;
    let runner_up = create_user(&test_app).await;
    let match_id = create_match(&test_app, &admin.token, "River", "Boca").await;

    save_prediction(&test_app, &leader.token, match_id, 2, 0).await; // exact: 3
    save_prediction(&test_app, &runner_up.token, match_id, 1, 0).await; // outcome: 1
    set_match_result(&test_app, &admin.token, match_id, 2, 0).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/ranking", test_app.address),
        &leader.token,
        None,
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse ranking");
    let entries = body["data"].as_array().expect("data should be an array");

    let leader_pos = entries
        .iter()
        .position(|e| e["username"] == json!(leader.username))
        .expect("leader missing from ranking");
    let runner_up_pos = entries
        .iter()
        .position(|e| e["username"] == json!(runner_up.username))
        .expect("runner-up missing from ranking");

    assert!(leader_pos < runner_up_pos);
    assert_eq!(3, entries[leader_pos]["total_points"]);
    assert_eq!(1, entries[runner_up_pos]["total_points"]);
}

#[tokio::test]
async fn ranking_requires_authentication() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/ranking", test_app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn the_first_registered_user_is_bootstrapped_as_admin() {
    let test_app = spawn_app().await;
    let client = Client::new();

    // No role pinning here: exercise the bootstrap rule directly
    let username = "founder";
    let register = client
        .post(format!("{}/register_user", test_app.address))
        .json(&json!({
            "username": username,
            "password": "password123",
            "email": "founder@example.com"
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(200, register.status().as_u16());

    let role: String = sqlx::query_scalar("SELECT role FROM users WHERE username = $1")
        .bind(username)
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to read role");
    assert_eq!("admin", role);

    // The second account stays a regular user
    let register = client
        .post(format!("{}/register_user", test_app.address))
        .json(&json!({
            "username": "latecomer",
            "password": "password123",
            "email": "latecomer@example.com"
        }))
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(200, register.status().as_u16());

    let role: String = sqlx::query_scalar("SELECT role FROM users WHERE username = $1")
        .bind("latecomer")
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to read role");
    assert_eq!("user", role);
}

#[tokio::test]
async fn admins_can_grant_and_revoke_the_admin_role() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::PATCH,
        &format!("{}/admin/users/{}/role", test_app.address, user.user_id),
        &admin.token,
        Some(json!({ "role": "admin" })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let role: String = sqlx::query_scalar("SELECT role FROM users WHERE id = $1")
        .bind(user.user_id)
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to read role");
    assert_eq!("admin", role);
}

#[tokio::test]
async fn admins_cannot_change_their_own_role() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::PATCH,
        &format!("{}/admin/users/{}/role", test_app.address, admin.user_id),
        &admin.token,
        Some(json!({ "role": "user" })),
    )
    .await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn user_listing_is_admin_only() {
    let test_app = spawn_app().await;
    let _admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/admin/users", test_app.address),
        &user.token,
        None,
    )
    .await;
    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn duplicate_usernames_are_rejected() {
    let test_app = spawn_app().await;
    let existing = register_and_login(&test_app, "user").await;

    let client = Client::new();
    let response = client
        .post(format!("{}/register_user", test_app.address))
        .json(&json!({
            "username": existing.username,
            "password": "password123",
            "email": "other@example.com"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(409, response.status().as_u16());
}
