//! Structured logging and optional OpenTelemetry span export.
//!
//! Logs are JSON lines on stdout. When `OTEL_EXPORTER_OTLP_ENDPOINT` is set,
//! spans are additionally exported via OTLP/gRPC to that collector.
//!
//! # Telemetry invariants
//!
//! - **No tokens or secrets** may appear in any span attribute or log field.
//!   Reference identifiers are not secret and may be logged.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`), overridden
//!   by `RUST_LOG`.

pub mod init;

pub use init::{init_telemetry, shutdown_telemetry};
