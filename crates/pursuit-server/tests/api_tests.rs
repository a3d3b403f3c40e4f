//! Integration tests for the HTTP API.
//!
//! Tests drive the Axum `Router` directly via `tower::ServiceExt` without
//! starting a TCP server, over an in-memory store and the catalog
//! generator.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use pursuit_core::{CaseEngine, CaseStore, GameConfig, StubContentGenerator};
use pursuit_db::{CaseStoreBackend, FileCaseStore};
use pursuit_server::router::build_router;
use pursuit_server::state::{AppState, ContentBackend};
use pursuit_types::{CLOSING_IN_CLUE, Case, CaseId, NO_SIGHTING_CLUE};
use serde_json::{Value, json};
use tower::ServiceExt;

fn make_state() -> Arc<AppState> {
    Arc::new(AppState::in_memory(GameConfig::default()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn new_game(router: &Router) -> Case {
    let (status, json) = send(
        router,
        Request::post("/new_game").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_value(json).unwrap()
}

fn travel_request(case_id: CaseId, city: &str) -> Request<Body> {
    Request::post("/travel")
        .header("content-type", "application/json")
        .body(Body::from(
            json!({"case_id": case_id, "city": city}).to_string(),
        ))
        .unwrap()
}

// =========================================================================
// Tests
// =========================================================================

#[tokio::test]
async fn index_returns_html() {
    let router = build_router(make_state());
    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));
}

#[tokio::test]
async fn index_survives_unreadable_store() {
    let dir = std::env::temp_dir().join(format!(
        "pursuit_index_{}_{}",
        std::process::id(),
        CaseId::new()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cases.json");
    std::fs::write(&path, "not json").unwrap();

    let engine = CaseEngine::new(
        CaseStoreBackend::File(FileCaseStore::new(&path)),
        ContentBackend::Stub(StubContentGenerator::new()),
        GameConfig::default(),
    );
    let router = build_router(Arc::new(AppState::new(engine)));
    let response = router
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"<div class="value">?</div>"#));

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn new_game_returns_fresh_case() {
    let router = build_router(make_state());
    let case = new_game(&router).await;

    assert_eq!(case.next_hop, 1);
    assert_eq!(case.hops.len(), 6);
    assert!(!case.hops.contains(&case.current_city));
    assert!(!case.suspect_name.is_empty());
    assert!(!case.stolen_item.is_empty());
}

#[tokio::test]
async fn destinations_offer_due_hop_not_current_city() {
    let router = build_router(make_state());
    let case = new_game(&router).await;

    let (status, json) = send(
        &router,
        Request::get(format!("/get_destinations?case_id={}", case.case_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["city"], case.current_city.as_str());

    let offered: Vec<String> = serde_json::from_value(json["destinations"].clone()).unwrap();
    assert!(offered.contains(&case.hops[0]));
    assert!(!offered.contains(&case.current_city));
}

#[tokio::test]
async fn clues_at_start_are_no_sighting() {
    let router = build_router(make_state());
    let case = new_game(&router).await;

    let (status, json) = send(
        &router,
        Request::get(format!("/get_clues?case_id={}", case.case_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let clues = json["clues"].as_array().unwrap();
    assert_eq!(clues.len(), 3);
    for clue in clues {
        assert_eq!(clue["clue"], NO_SIGHTING_CLUE);
        assert_eq!(clue["location"], case.current_city.as_str());
    }
}

#[tokio::test]
async fn travel_outcomes_over_http() {
    let router = build_router(make_state());
    let case = new_game(&router).await;

    // Skipping ahead is refused with a 200 and an error body.
    let (status, json) = send(&router, travel_request(case.case_id, &case.hops[2])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"error": "You cannot travel to that city"}));

    // Wrong turn moves without advancing.
    let (status, json) = send(&router, travel_request(case.case_id, "Zzyzx")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({"current_city": "Zzyzx"}));

    // The due hop advances.
    let (status, json) = send(&router, travel_request(case.case_id, &case.hops[0])).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["current_city"], case.hops[0].as_str());

    let (status, json) = send(
        &router,
        Request::get(format!("/api/cases/{}", case.case_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["next_hop"], 2);
    assert_eq!(json["current_city"], case.hops[0].as_str());
}

#[tokio::test]
async fn full_chase_ends_in_arrest() {
    let state = make_state();
    let router = build_router(Arc::clone(&state));
    let case = new_game(&router).await;

    for hop in &case.hops {
        let (status, _) = send(&router, travel_request(case.case_id, hop)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let stored = state.engine.store().get(case.case_id).await.unwrap().unwrap();
    assert!(stored.is_closed());

    let (_, json) = send(
        &router,
        Request::get(format!("/get_destinations?case_id={}", case.case_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(json["destinations"], json!([]));

    let (_, json) = send(
        &router,
        Request::get(format!("/get_clues?case_id={}", case.case_id))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    let clues = json["clues"].as_array().unwrap();
    let arrest = format!(
        "Congratulations! You have arrested the suspect, {}",
        case.suspect_name
    );
    assert_eq!(clues.iter().filter(|c| c["clue"] == arrest.as_str()).count(), 1);
    assert_eq!(clues.iter().filter(|c| c["clue"] == CLOSING_IN_CLUE).count(), 2);
}

#[tokio::test]
async fn unknown_case_is_404() {
    let router = build_router(make_state());
    let id = CaseId::new();

    let (status, json) = send(
        &router,
        Request::get(format!("/get_clues?case_id={id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);

    let (status, _) = send(&router, travel_request(id, "Paris")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_case_id_is_400() {
    let router = build_router(make_state());
    let (status, json) = send(
        &router,
        Request::get("/get_destinations?case_id=not-a-uuid")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);

    let (status, _) = send(
        &router,
        Request::get("/api/cases/not-a-uuid").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_cases_counts_games() {
    let router = build_router(make_state());
    new_game(&router).await;
    new_game(&router).await;

    let (status, json) = send(
        &router,
        Request::get("/api/cases").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 2);
    assert_eq!(json["cases"].as_array().unwrap().len(), 2);
}
