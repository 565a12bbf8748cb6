//! Command logging utilities for verbose output.

use std::process::Command;
use tracing::debug;

/// Render a command as a single shell-like line, e.g. `git -C art checkout main`.
pub fn describe_cmd(cmd: &Command) -> String {
    let mut parts = vec![cmd.get_program().to_string_lossy().into_owned()];
    parts.extend(cmd.get_args().map(|a| a.to_string_lossy().into_owned()));
    parts.join(" ")
}

/// Log a command just before execution.
///
/// Emits a `tracing::debug!` event with the program name and arguments.
/// Visible when running with `--verbose` (which sets `repomerge=debug`)
/// or via `RUST_LOG=repomerge::cmd=debug`.
pub fn log_cmd(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy()).collect();
    debug!(target: "repomerge::cmd", %program, ?args, "exec");
}
