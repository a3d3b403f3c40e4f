//! HTTP API server for the Pursuit chase game.
//!
//! Exposes the four game operations over JSON plus a read-only view of
//! stored cases. The `pursuit-server` binary wires configuration, logging,
//! the case store and the content generator into this router.
//!
//! # Modules
//!
//! - [`router`] -- Route table and middleware
//! - [`handlers`] -- Endpoint handlers
//! - [`state`] -- Shared state and runtime backend selection
//! - [`server`] -- Listener lifecycle and graceful shutdown
//! - [`error`] -- API and startup error types

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;
