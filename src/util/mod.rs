//! Utility functions and helpers

pub mod cmd;

pub use cmd::{describe_cmd, log_cmd};
