//! HTTP endpoint handlers.
//!
//! Each handler parses its input, calls one [`CaseEngine`](pursuit_core::CaseEngine)
//! operation through the shared [`AppState`], and returns the result as
//! JSON.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/new_game` | Open a case |
//! | `GET` | `/get_destinations` | Travel candidates (`?case_id=`) |
//! | `GET` | `/get_clues` | Clues for the current city (`?case_id=`) |
//! | `POST` | `/travel` | Move the player (`{case_id, city}`) |
//! | `GET` | `/api/cases` | List cases |
//! | `GET` | `/api/cases/{id}` | Single case |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use pursuit_types::{Case, CaseId, ClueSheet, DestinationSet, TravelOutcome, TravelRequest};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters naming a case.
#[derive(Debug, serde::Deserialize)]
pub struct CaseQuery {
    /// The case id as a UUID string.
    pub case_id: String,
}

fn parse_case_id(raw: &str) -> Result<CaseId, ApiError> {
    raw.parse::<CaseId>()
        .map_err(|e| ApiError::InvalidId(format!("{raw}: {e}")))
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page with server status and the route list.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let (open, closed) = match state.engine.cases().await {
        Ok(cases) => {
            let closed = cases.values().filter(|c| c.is_closed()).count();
            (cases.len().saturating_sub(closed).to_string(), closed.to_string())
        }
        Err(e) => {
            tracing::warn!(error = %e, "case counts unavailable for status page");
            (String::from("?"), String::from("?"))
        }
    };
    let game = state.engine.config();
    let hops = game.hop_count;

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Pursuit</title>
    <style>
        body {{
            background: #fdf6e3;
            color: #3b3024;
            font-family: Georgia, 'Times New Roman', serif;
            padding: 2rem;
            max-width: 720px;
            margin: 0 auto;
        }}
        h1 {{ color: #b22222; margin-bottom: 0.25rem; }}
        .metric {{
            display: inline-block;
            border: 1px solid #d3c6a6;
            border-radius: 6px;
            padding: 0.75rem 1.25rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
        }}
        .metric .value {{ font-size: 1.5rem; font-weight: bold; }}
        code {{ color: #b22222; }}
    </style>
</head>
<body>
    <h1>Pursuit</h1>
    <p>Chase the thief across {hops} cities.</p>
    <div>
        <div class="metric"><div>Open cases</div><div class="value">{open}</div></div>
        <div class="metric"><div>Closed cases</div><div class="value">{closed}</div></div>
    </div>
    <ul>
        <li><code>POST /new_game</code></li>
        <li><code>GET /get_destinations?case_id=</code></li>
        <li><code>GET /get_clues?case_id=</code></li>
        <li><code>POST /travel</code></li>
        <li><a href="/api/cases"><code>GET /api/cases</code></a></li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// Open a new case and return it.
pub async fn new_game(State(state): State<Arc<AppState>>) -> Result<Json<Case>, ApiError> {
    Ok(Json(state.engine.create_case().await?))
}

/// Travel candidates for the case's current stage.
pub async fn get_destinations(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CaseQuery>,
) -> Result<Json<DestinationSet>, ApiError> {
    let case_id = parse_case_id(&query.case_id)?;
    Ok(Json(state.engine.resolve_destinations(case_id).await?))
}

/// Clues for the city the player is in.
pub async fn get_clues(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CaseQuery>,
) -> Result<Json<ClueSheet>, ApiError> {
    let case_id = parse_case_id(&query.case_id)?;
    Ok(Json(state.engine.dispatch_clues(case_id).await?))
}

/// Move the player. A refused move is a `200` with an `error` field.
pub async fn travel(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TravelRequest>,
) -> Result<Json<TravelOutcome>, ApiError> {
    Ok(Json(
        state.engine.travel(request.case_id, &request.city).await?,
    ))
}

// ---------------------------------------------------------------------------
// Read-only case API
// ---------------------------------------------------------------------------

/// List every stored case.
pub async fn list_cases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let cases: Vec<Case> = state.engine.cases().await?.into_values().collect();
    Ok(Json(serde_json::json!({
        "count": cases.len(),
        "cases": cases,
    })))
}

/// Fetch one case by id.
pub async fn get_case(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Case>, ApiError> {
    let case_id = parse_case_id(&id)?;
    Ok(Json(state.engine.case(case_id).await?))
}
