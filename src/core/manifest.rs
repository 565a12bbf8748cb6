//! git-repo XML manifest model
//!
//! Parses Google's `repo` tool manifest format into the remotes and projects
//! the merge and push drivers walk over. Only the attributes those drivers
//! read are modelled; `<default>`, `<include>`, `<copyfile>` and any other
//! element or attribute is accepted and ignored. A missing attribute reads
//! as the empty string.

use quick_xml::de::from_str;
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name, resolved against the current directory
pub const MANIFEST_FILE: &str = "manifest.xml";

/// Errors from loading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read {}: {}", .path.display(), .source)]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse XML: {0}")]
    Parse(String),
}

// ── XML types ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename = "manifest")]
pub struct Manifest {
    #[serde(rename = "remote", default)]
    pub remotes: Vec<Remote>,

    #[serde(rename = "project", default)]
    pub projects: Vec<Project>,
}

/// A named upstream host plus the revision pushed to it by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Remote {
    #[serde(rename = "@name", default)]
    pub name: String,

    /// URL prefix; a project's path is appended to it
    #[serde(rename = "@fetch", default)]
    pub fetch: String,

    #[serde(rename = "@revision", default)]
    pub revision: String,
}

/// One managed repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Project {
    /// Location relative to the workspace root
    #[serde(rename = "@path", default)]
    pub path: String,

    #[serde(rename = "@name", default)]
    pub name: String,

    /// Name of the `<remote>` this project pushes to
    #[serde(rename = "@remote", default)]
    pub remote: String,

    /// Group tag, compared as a whole string
    #[serde(rename = "@groups", default)]
    pub groups: String,

    /// Per-project revision; overrides the remote's when set
    #[serde(rename = "@revision", default)]
    pub revision: String,
}

// ── Implementation ─────────────────────────────────────────────────────────

/// Local name of the document element, skipping the prolog
fn root_element(xml: &str) -> Result<String, ManifestError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Ok(String::from_utf8_lossy(e.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(ManifestError::Parse("empty document".to_string())),
            Ok(_) => {}
            Err(e) => return Err(ManifestError::Parse(e.to_string())),
        }
    }
}

impl Manifest {
    /// Parse from an XML string. The document element must be `<manifest>`.
    pub fn parse(xml: &str) -> Result<Self, ManifestError> {
        let root = root_element(xml)?;
        if root != "manifest" {
            return Err(ManifestError::Parse(format!(
                "expected element type <manifest> but have <{root}>"
            )));
        }
        from_str(xml).map_err(|e| ManifestError::Parse(e.to_string()))
    }

    /// Read and parse a manifest file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::File {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Look up a remote by name. The first match wins.
    pub fn remote(&self, name: &str) -> Option<&Remote> {
        self.remotes.iter().find(|r| r.name == name)
    }

    /// Projects whose group tag equals `group`, in manifest order
    pub fn projects_in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Project> {
        self.projects.iter().filter(move |p| p.groups == group)
    }

    /// Resolve where `project` is pushed: `<fetch><path> <revision>`.
    ///
    /// Returns an empty string when the project's remote is not declared or
    /// has no fetch URL. Callers decide whether that is an error.
    pub fn push_destination(&self, project: &Project) -> String {
        let Some(remote) = self.remote(&project.remote) else {
            return String::new();
        };
        if remote.fetch.is_empty() {
            return String::new();
        }

        let revision = if project.revision.is_empty() {
            &remote.revision
        } else {
            &project.revision
        };

        format!("{}{} {}", remote.fetch, project.path, revision)
    }
}
