//! Axum router construction for the API server.
//!
//! Assembles the game routes and the read-only case routes into a single
//! [`Router`] with CORS and request tracing enabled.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /new_game` -- open a case
/// - `GET /get_destinations?case_id=` -- travel candidates
/// - `GET /get_clues?case_id=` -- clues for the current city
/// - `POST /travel` -- move the player
/// - `GET /api/cases` -- list cases
/// - `GET /api/cases/{id}` -- single case
///
/// CORS allows any origin so a browser client can be served from
/// elsewhere.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Game
        .route("/new_game", post(handlers::new_game))
        .route("/get_destinations", get(handlers::get_destinations))
        .route("/get_clues", get(handlers::get_clues))
        .route("/travel", post(handlers::travel))
        // Read-only case API
        .route("/api/cases", get(handlers::list_cases))
        .route("/api/cases/{id}", get(handlers::get_case))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
