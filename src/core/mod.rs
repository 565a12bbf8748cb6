//! Core data model for repomerge

pub mod manifest;
pub mod repo;

pub use manifest::{Manifest, ManifestError, Project, Remote, MANIFEST_FILE};
pub use repo::RepoInfo;
