//! Configuration loading and validation for the token issuer.
//!
//! All values are read from environment variables at startup, after an
//! optional `.env` file has been loaded. The process will exit with a clear
//! error message if any required variable is missing or invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::token::{IssueError, IssuerSecrets, Secret};

/// Validated token issuer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Passphrase the salted AES envelope is derived from. **Required.**
    #[serde(rename = "velve_encryption_key")]
    pub encryption_key: Secret,

    /// First payload fragment. **Required.**
    #[serde(rename = "velve_private_key")]
    pub private_key: Secret,

    /// Second payload fragment. **Required.**
    #[serde(rename = "velve_public_key")]
    pub public_key: Secret,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// OTLP gRPC endpoint for span export. Unset or empty disables export.
    #[serde(default)]
    pub otel_exporter_otlp_endpoint: Option<String>,
}

fn default_port() -> u16 {
    3000
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load `.env` (if present), then load and validate configuration from
    /// environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent, empty, or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(config::Environment::default())
    }

    /// Load and validate configuration from an explicit environment source.
    pub fn from_environment(env: config::Environment) -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(env)
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// The three issuer secrets, validated.
    pub fn issuer_secrets(&self) -> Result<IssuerSecrets, IssueError> {
        IssuerSecrets::new(
            self.encryption_key.clone(),
            self.private_key.clone(),
            self.public_key.clone(),
        )
    }

    /// OTLP endpoint, if one is configured.
    pub fn otlp_endpoint(&self) -> Option<&str> {
        self.otel_exporter_otlp_endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        ensure_present(&self.encryption_key, "VELVE_ENCRYPTION_KEY")?;
        ensure_present(&self.private_key, "VELVE_PRIVATE_KEY")?;
        ensure_present(&self.public_key, "VELVE_PUBLIC_KEY")?;

        if self.port == 0 {
            anyhow::bail!("PORT must be a non-zero TCP port");
        }
        Ok(())
    }
}

fn ensure_present(value: &Secret, name: &str) -> Result<()> {
    if value.is_blank() {
        anyhow::bail!("{name} is required and must not be empty");
    }
    Ok(())
}
