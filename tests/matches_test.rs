//! Public match listing: tournament context, league scoping and lookup.

use reqwest::Client;
use serde_json::json;
use uuid::Uuid;

mod common;
use common::prode_helpers::{
    create_admin, create_league, create_match, create_match_in_leagues, create_tournament,
    create_user, set_match_result,
};
use common::utils::{make_authenticated_request, spawn_app};

#[tokio::test]
async fn match_listing_requires_authentication() {
    let test_app = spawn_app().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/matches", test_app.address))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(401, response.status().as_u16());
}

#[tokio::test]
async fn matches_are_listed_with_tournament_and_league_context() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;
    let tournament_id = create_tournament(&test_app, &admin.token, "Mundial 2026").await;
    let league_id = create_league(&test_app, &user.token, "Amigos del Prode").await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/matches", test_app.address),
        &admin.token,
        Some(json!({
            "tournament_id": tournament_id,
            "team_a": "Argentina",
            "team_b": "México",
            "match_date": "2026-06-11T18:00:00Z",
            "stage": "Group Stage",
            "group_label": "Group A",
            "league_ids": [league_id],
        })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/matches", test_app.address),
        &user.token,
        None,
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let matches = body["data"].as_array().expect("data should be an array");
    assert_eq!(1, matches.len());

    let fixture = &matches[0];
    assert_eq!("Argentina", fixture["team_a"]);
    assert_eq!("México", fixture["team_b"]);
    assert_eq!("Mundial 2026", fixture["tournament_name"]);
    assert_eq!("Group Stage", fixture["stage"]);
    assert_eq!(json!([league_id.to_string()]), fixture["league_ids"]);
    assert_eq!(false, fixture["is_played"]);
}

#[tokio::test]
async fn a_played_match_exposes_its_result() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let user = create_user(&test_app).await;
    let match_id = create_match(&test_app, &admin.token, "River", "Boca").await;

    set_match_result(&test_app, &admin.token, match_id, 2, 1).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/matches/{}", test_app.address, match_id),
        &user.token,
        None,
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(true, body["data"]["is_played"]);
    assert_eq!(2, body["data"]["actual_score_a"]);
    assert_eq!(1, body["data"]["actual_score_b"]);
}

#[tokio::test]
async fn looking_up_an_unknown_match_returns_404() {
    let test_app = spawn_app().await;
    let user = create_user(&test_app).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::GET,
        &format!("{}/matches/{}", test_app.address, Uuid::new_v4()),
        &user.token,
        None,
    )
    .await;
    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn fixture_with_identical_teams_is_rejected() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::POST,
        &format!("{}/admin/matches", test_app.address),
        &admin.token,
        Some(json!({
            "team_a": "River",
            "team_b": "River",
            "match_date": "2026-06-11T18:00:00Z",
        })),
    )
    .await;
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn fixture_edits_never_touch_the_score() {
    let test_app = spawn_app().await;
    let admin = create_admin(&test_app).await;
    let match_id = create_match(&test_app, &admin.token, "River", "Boca").await;
    set_match_result(&test_app, &admin.token, match_id, 3, 0).await;

    let client = Client::new();
    let response = make_authenticated_request(
        &client,
        reqwest::Method::PATCH,
        &format!("{}/admin/matches/{}", test_app.address, match_id),
        &admin.token,
        Some(json!({ "stage": "Final" })),
    )
    .await;
    assert_eq!(200, response.status().as_u16());

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!("Final", body["data"]["stage"]);
    assert_eq!(3, body["data"]["actual_score_a"]);
    assert_eq!(0, body["data"]["actual_score_b"]);
    assert_eq!(true, body["data"]["is_played"]);
}
