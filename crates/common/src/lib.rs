//! Common types, response bodies, and errors shared across `token-issuer` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
