//! repomerge - bulk merge and push across an Android repo manifest
//!
//! Reads the `manifest.xml` of a `repo`-managed tree, then checks out and
//! pulls every platform project from upstream, and/or pushes every project
//! to the remote the manifest assigns it.

pub mod cli;
pub mod core;
pub mod git;
pub mod telemetry;
pub mod util;

pub use crate::core::manifest::Manifest;
pub use crate::core::repo::RepoInfo;
pub use git::{GitError, GitRunner, SystemGit};
