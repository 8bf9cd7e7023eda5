//! Deleting matches and tournaments: predictions go with them and every
//! affected user's total is rebuilt from what remains.

use reqwest::Client;
use uuid::Uuid;

mod common;
use common::prode_helpers::{
    create_admin, create_match, create_tournament, create_user, save_prediction, set_match_result,
    total_points,
};
use common::utils::{make_authenticated_request, spawn_app};

async fn delete_match(
    app: &common::utils::TestApp,
    token: &str,
    match_id: Uuid,
) -> reqwest::Response {
    let client = Client::new();
    make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &format!("{}/admin/matches/{}", app.address, match_id),
        token,
        None,
    )
    .await
}

#[tokio::test]
async fn deleting_a_match_removes_its_predictions_and_resyncs_totals() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;
    let kept = create_match(&test_app, &admin.token, "River", "Boca").await;
    let doomed = create_match(&test_app, &admin.token, "Brasil", "Francia").await;

    save_prediction(&test_app, &user.token, kept, 1, 0).await;
    save_prediction(&test_app, &user.token, doomed, 2, 2).await;

    set_match_result(&test_app, &admin.token, kept, 1, 0).await; // exact: 3
    set_match_result(&test_app, &admin.token, doomed, 2, 2).await; // exact: 3
    assert_eq!(6, total_points(&test_app, user.user_id).await);

    let response = delete_match(&test_app, &admin.token, doomed).await;
    assert_eq!(200, response.status().as_u16());

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM predictions WHERE match_id = $1")
        .bind(doomed)
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count predictions");
    assert_eq!(0, remaining);

    // The total no longer includes the deleted match
    assert_eq!(3, total_points(&test_app, user.user_id).await);
}

#[tokio::test]
async fn deleting_an_unplayed_match_leaves_totals_alone() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;
    let played = create_match(&test_app, &admin.token, "River", "Boca").await;
    let unplayed = create_match(&test_app, &admin.token, "Brasil", "Francia").await;

    save_prediction(&test_app, &user.token, played, 1, 0).await;
    save_prediction(&test_app, &user.token, unplayed, 4, 4).await;
    set_match_result(&test_app, &admin.token, played, 1, 0).await;

    let response = delete_match(&test_app, &admin.token, unplayed).await;
    assert_eq!(200, response.status().as_u16());

    assert_eq!(3, total_points(&test_app, user.user_id).await);
}

#[tokio::test]
async fn deleting_an_unknown_match_returns_404() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;

    let response = delete_match(&test_app, &admin.token, Uuid::new_v4()).await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn non_admin_users_cannot_delete_matches() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;
    let match_id = create_match(&test_app, &admin.token, "River", "Boca").await;

    let response = delete_match(&test_app, &user.token, match_id).await;
    assert_eq!(403, response.status().as_u16());
}

#[tokio::test]
async fn deleting_a_tournament_cascades_through_matches_and_totals() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;
    let tournament_id = create_tournament(&test_app, &admin.token, "Copa 2026").await;

    // A fixture inside the tournament and an independent one
    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/matches", test_app.address),
        &admin.token,
        Some(serde_json::json!({
            "tournament_id": tournament_id,
            "team_a": "River",
            "team_b": "Boca",
            "match_date": "2026-06-11T18:00:00Z",
        })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let inside = Uuid::parse_str(body["data"]["id"].as_str().unwrap()).unwrap();

    let outside = create_match(&test_app, &admin.token, "Brasil", "Francia").await;

    save_prediction(&test_app, &user.token, inside, 2, 0).await;
    save_prediction(&test_app, &user.token, outside, 1, 1).await;
    set_match_result(&test_app, &admin.token, inside, 2, 0).await; // exact: 3
    set_match_result(&test_app, &admin.token, outside, 1, 1).await; // exact: 3
    assert_eq!(6, total_points(&test_app, user.user_id).await);

    let response = make_authenticated_request(
        &client,
        reqwest::Method::DELETE,
        &format!("{}/admin/tournaments/{}", test_app.address, tournament_id),
        &admin.token,
        None,
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let orphaned: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM matches WHERE id = $1")
        .bind(inside)
        .fetch_one(&test_app.db_pool)
        .await
        .expect("Failed to count matches");
    assert_eq!(0, orphaned);

    assert_eq!(3, total_points(&test_app, user.user_id).await);
}
