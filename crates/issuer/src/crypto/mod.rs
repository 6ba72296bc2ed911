//! Salted AES-256-CBC token encryption primitives.
//!
//! This module is intentionally free of HTTP and configuration dependencies.
//! It provides the low-level encrypt/decrypt operations used by the token layer.
//!
//! # Ciphertext format
//!
//! ```text
//! base64( "Salted__" || salt[8] || AES-256-CBC-PKCS7(key, iv, plaintext) )
//! ```
//!
//! This is the envelope written by `openssl enc -aes-256-cbc -md md5` and by
//! passphrase-mode AES in common JavaScript crypto libraries, so downstream
//! consumers can decrypt tokens with only the passphrase.

pub mod cipher;
pub mod kdf;

pub use cipher::{decrypt_with_passphrase, encrypt_with_passphrase, CipherError, SaltedCiphertext};
