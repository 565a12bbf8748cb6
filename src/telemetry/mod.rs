//! Logging setup for repomerge.
//!
//! Structured logging via the `tracing` crate. Per-command debug events come
//! from `util::log_cmd`; this module only installs the subscriber.
//!
//! # Feature Flags
//!
//! - `release-logs`: Strip debug/trace at compile time
//! - `max-perf`: Disable all tracing for maximum performance

mod init;

pub use init::{init_telemetry, TelemetryConfig, TelemetryGuard};
