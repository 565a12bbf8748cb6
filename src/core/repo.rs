//! Project location on disk

use std::path::{Path, PathBuf};

use crate::core::manifest::Project;

/// A manifest project resolved against the workspace root
#[derive(Debug, Clone)]
pub struct RepoInfo {
    /// Project name (from manifest)
    pub name: String,
    /// Absolute path on disk
    pub absolute_path: PathBuf,
}

impl RepoInfo {
    /// Resolve a manifest project under `workspace_root`
    pub fn from_project(project: &Project, workspace_root: &Path) -> Self {
        // A leading slash would make `join` discard the workspace root
        let absolute_path = workspace_root.join(project.path.trim_start_matches('/'));

        Self {
            name: project.name.clone(),
            absolute_path,
        }
    }

    /// Check if the project's directory exists
    pub fn exists(&self) -> bool {
        self.absolute_path.exists()
    }
}
