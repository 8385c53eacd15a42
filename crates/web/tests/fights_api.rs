mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{StatusCode, header::CONTENT_TYPE};
use common::*;
use serde_json::json;
use storage::{
    models::{Fight, FighterKind},
    repository::{FightStore, memory::InMemoryFightStore},
};

#[tokio::test]
async fn test_hello_endpoint() {
    let app = default_app();

    let response = send(&app.router, get("/api/fights/hello")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"hello");
}

#[tokio::test]
async fn should_not_get_unknown_fight() {
    let app = default_app();

    let response = send(&app.router, get("/api/fights/-8472365")).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn should_not_add_invalid_item() {
    let app = default_app();

    let response = send(
        &app.router,
        post_json("/api/fights", json!({ "hero": null, "villain": null })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count().await.unwrap(), NB_FIGHTS as i64);
}

#[tokio::test]
async fn should_not_add_fight_with_invalid_level() {
    let app = default_app();

    let response = send(
        &app.router,
        post_json(
            "/api/fights",
            json!({
                "hero": { "name": DEFAULT_HERO_NAME, "picture": DEFAULT_HERO_PICTURE, "level": 0 },
                "villain": { "name": DEFAULT_VILLAIN_NAME, "picture": DEFAULT_VILLAIN_PICTURE, "level": 6 }
            }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count().await.unwrap(), NB_FIGHTS as i64);
}

#[tokio::test]
async fn should_not_add_fight_with_blank_name() {
    let app = default_app();

    let response = send(
        &app.router,
        post_json(
            "/api/fights",
            json!({
                "hero": { "name": "   ", "picture": DEFAULT_HERO_PICTURE, "level": 42 },
                "villain": { "name": DEFAULT_VILLAIN_NAME, "picture": DEFAULT_VILLAIN_PICTURE, "level": 6 }
            }),
        ),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains("hero"));
    assert_eq!(app.store.count().await.unwrap(), NB_FIGHTS as i64);
}

#[tokio::test]
async fn should_reject_malformed_body() {
    let app = default_app();

    let response = send(
        &app.router,
        post_json("/api/fights", json!({ "hero": { "name": "No level" } })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.store.count().await.unwrap(), NB_FIGHTS as i64);
}

#[tokio::test]
async fn should_get_initial_items() {
    let app = default_app();

    let response = send(&app.router, get("/api/fights")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let fights: Vec<Fight> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(fights.len(), NB_FIGHTS);
}

#[tokio::test]
async fn should_get_no_content_when_there_are_no_fights() {
    let app = build_app(
        InMemoryFightStore::new(),
        hero_directory(Duration::ZERO),
        villain_directory(Duration::ZERO),
    );

    let response = send(&app.router, get("/api/fights")).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn should_add_an_item() {
    let app = default_app();

    let response = send(
        &app.router,
        post_json(
            "/api/fights",
            json!({ "hero": default_hero(), "villain": default_villain() }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let fight_id = created["id"].as_i64().expect("fight id");

    let response = send(&app.router, get(&format!("/api/fights/{}", fight_id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let fight = body_json(response).await;
    assert_eq!(fight["winnerName"], DEFAULT_HERO_NAME);
    assert_eq!(fight["winnerPicture"], DEFAULT_HERO_PICTURE);
    assert_eq!(fight["winnerLevel"], DEFAULT_HERO_LEVEL);
    assert_eq!(fight["loserName"], DEFAULT_VILLAIN_NAME);
    assert_eq!(fight["loserPicture"], DEFAULT_VILLAIN_PICTURE);
    assert_eq!(fight["loserLevel"], DEFAULT_VILLAIN_LEVEL);
    assert!(fight["fightDate"].is_string());
    assert_eq!(fight, created);

    let response = send(&app.router, get("/api/fights")).await;
    let fights: Vec<Fight> = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(fights.len(), NB_FIGHTS + 1);
}

#[tokio::test]
async fn should_get_random_fighters() {
    let app = default_app();

    let response = send(&app.router, get("/api/fights/randomfighters")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "application/json");
    let fighters = body_json(response).await;
    assert_eq!(fighters["hero"]["name"], DEFAULT_HERO_NAME);
    assert_eq!(fighters["hero"]["picture"], DEFAULT_HERO_PICTURE);
    assert_eq!(fighters["hero"]["level"], DEFAULT_HERO_LEVEL);
    assert_eq!(fighters["villain"]["name"], DEFAULT_VILLAIN_NAME);
    assert_eq!(fighters["villain"]["picture"], DEFAULT_VILLAIN_PICTURE);
    assert_eq!(fighters["villain"]["level"], DEFAULT_VILLAIN_LEVEL);
}

#[tokio::test]
async fn should_time_out_on_slow_directory() {
    let app = build_app(
        InMemoryFightStore::with_fights(seed_fights(NB_FIGHTS)),
        hero_directory(Duration::ZERO),
        villain_directory(Duration::from_secs(5)),
    );

    let response = send(&app.router, get("/api/fights/randomfighters")).await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(app.store.count().await.unwrap(), NB_FIGHTS as i64);
}

#[tokio::test]
async fn should_report_unavailable_directory() {
    let app = build_app(
        InMemoryFightStore::with_fights(seed_fights(NB_FIGHTS)),
        Arc::new(UnreachableDirectory(FighterKind::Hero)),
        villain_directory(Duration::ZERO),
    );

    let response = send(&app.router, get("/api/fights/randomfighters")).await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(app.store.count().await.unwrap(), NB_FIGHTS as i64);
}

#[tokio::test]
async fn should_count_winners_in_statistics() {
    let app = default_app();

    for _ in 0..3 {
        let response = send(
            &app.router,
            post_json(
                "/api/fights",
                json!({ "hero": default_hero(), "villain": default_villain() }),
            ),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let mut recorded = false;
    for _ in 0..50 {
        if app.winners.read().await.top(1).first().map(|s| s.score) == Some(3) {
            recorded = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(recorded, "statistics collector did not record the fights");

    let response = send(&app.router, get("/api/stats/winners")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!([{ "name": DEFAULT_HERO_NAME, "score": 3 }])
    );
}

#[tokio::test]
async fn should_serve_openapi_document() {
    let app = default_app();

    let response = send(&app.router, get("/api-docs/openapi.json")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/fights/{id}"].is_object());
}
