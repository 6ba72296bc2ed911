//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::token::TokenIssuer;

/// Application state shared across all request handlers.
///
/// Cloned by Axum for each request; the issuer itself sits behind an `Arc`
/// and is never mutated after startup.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Issuer holding the process-wide secrets.
    pub issuer: Arc<TokenIssuer>,
}

impl AppState {
    /// Create a new [`AppState`] around `issuer`.
    pub fn new(issuer: TokenIssuer) -> Self {
        Self {
            issuer: Arc::new(issuer),
        }
    }
}
