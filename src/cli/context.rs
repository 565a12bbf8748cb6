//! Workspace context passed to command handlers
//!
//! Bundles the loaded manifest, the directory projects are resolved against,
//! and the quiet flag into one struct.

use crate::core::manifest::Manifest;
use std::path::{Path, PathBuf};

/// Workspace context available to all command handlers.
///
/// Created once in `main()` after loading the manifest, then passed
/// by reference to every driver.
pub struct WorkspaceContext {
    /// Directory project paths are resolved against
    pub workspace_root: PathBuf,
    /// Parsed manifest
    pub manifest: Manifest,
    /// Suppress non-essential output (`--quiet`)
    pub quiet: bool,
}

impl WorkspaceContext {
    pub fn new(workspace_root: PathBuf, manifest: Manifest) -> Self {
        Self {
            workspace_root,
            manifest,
            quiet: false,
        }
    }

    /// Get workspace root as a `&Path`
    pub fn root(&self) -> &Path {
        &self.workspace_root
    }
}
