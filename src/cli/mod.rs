//! CLI layer
//!
//! Drivers, output helpers and the shared project loop behind the clap
//! front end in `main.rs`.

pub mod commands;
pub mod context;
pub mod output;
pub mod repo_iter;

pub use context::WorkspaceContext;
pub use output::Output;
pub use repo_iter::RepoOpSummary;
