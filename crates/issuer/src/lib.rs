//! `token-issuer` — issues salted, AES-encrypted authorization tokens over HTTP.
//!
//! Each `GET /` builds `private_key || public_key || FR-<epoch millis>`,
//! encrypts it under the configured passphrase, and returns the envelope with
//! its reference identifier. No state outlives a request.

pub mod config;
pub mod crypto;
pub mod server;
pub mod telemetry;
pub mod token;
