//! Axum HTTP server, routing, and middleware.
//!
//! # Responsibilities
//! - Define the Axum router with all routes and shared middleware.
//! - Inject shared application state (`AppState`) into handlers.
//! - Stop accepting connections on shutdown signals.

pub mod handlers;
pub mod router;
pub mod shutdown;
pub mod state;
