//! Test fixtures for creating manifest workspaces.
//!
//! Provides a `WorkspaceBuilder` that writes a `manifest.xml` and lays out
//! project directories under a temporary workspace. Projects can be plain
//! directories (for recording-runner tests), absent, or real clones of a
//! local bare remote (for end-to-end merge and push). Everything runs offline.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use repomerge::cli::WorkspaceContext;
use repomerge::core::manifest::{Manifest, MANIFEST_FILE};

use super::git_helpers;

/// A test workspace with temporary directories that are cleaned up on drop.
pub struct WorkspaceFixture {
    /// Kept alive for the lifetime of the fixture.
    pub _temp: TempDir,
    /// Workspace root (contains manifest.xml and the project trees).
    pub workspace_root: PathBuf,
    /// Bare remotes, laid out by project path.
    pub remotes_dir: PathBuf,
    /// Scratch clones used to publish upstream commits.
    staging_dir: PathBuf,
}

impl WorkspaceFixture {
    /// Path of a project inside the workspace.
    pub fn project_path(&self, path: &str) -> PathBuf {
        self.workspace_root.join(path)
    }

    /// Path of the bare remote backing a project.
    pub fn remote_path(&self, path: &str) -> PathBuf {
        self.remotes_dir.join(path)
    }

    /// `file://` URL of the remotes directory, without a trailing slash.
    pub fn remotes_url(&self) -> String {
        format!("file://{}", self.remotes_dir.display())
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.workspace_root.join(MANIFEST_FILE)
    }

    /// Load the manifest from this workspace.
    pub fn load_manifest(&self) -> Manifest {
        Manifest::load(self.manifest_path()).expect("failed to load manifest")
    }

    /// Context for driving commands directly; output is quiet.
    pub fn context(&self) -> WorkspaceContext {
        let mut ctx = WorkspaceContext::new(self.workspace_root.clone(), self.load_manifest());
        ctx.quiet = true;
        ctx
    }

    /// Commit a file upstream (to the bare remote of `path`, on `main`).
    /// Returns the new commit hash.
    pub fn push_upstream_commit(&self, path: &str, filename: &str, content: &str) -> String {
        let staging = self.staging_dir.join(path);
        let sha = git_helpers::commit_file(&staging, filename, content, &format!("Add {}", filename));
        git_helpers::push_branch(&staging, "origin", "main");
        sha
    }
}

enum ProjectKind {
    /// Plain directory, no git repository.
    Directory,
    /// Listed in the manifest, absent on disk.
    Missing,
    /// Clone of a bare remote under `remotes_dir`.
    GitRepo,
}

struct ProjectSpec {
    path: String,
    name: String,
    remote: String,
    groups: Option<String>,
    kind: ProjectKind,
}

enum Fetch {
    Url(String),
    /// `file://<remotes_dir>/`, resolved at build time.
    LocalRemotes,
}

struct RemoteSpec {
    name: String,
    fetch: Fetch,
    revision: String,
}

/// Builder for creating test workspaces.
pub struct WorkspaceBuilder {
    remotes: Vec<RemoteSpec>,
    projects: Vec<ProjectSpec>,
    raw_manifest: Option<String>,
}

impl WorkspaceBuilder {
    pub fn new() -> Self {
        Self {
            remotes: Vec::new(),
            projects: Vec::new(),
            raw_manifest: None,
        }
    }

    /// Declare a remote with a fixed fetch URL.
    pub fn add_remote(mut self, name: &str, fetch: &str, revision: &str) -> Self {
        self.remotes.push(RemoteSpec {
            name: name.to_string(),
            fetch: Fetch::Url(fetch.to_string()),
            revision: revision.to_string(),
        });
        self
    }

    /// Declare a remote whose fetch URL points at the fixture's bare remotes.
    pub fn add_local_remote(mut self, name: &str, revision: &str) -> Self {
        self.remotes.push(RemoteSpec {
            name: name.to_string(),
            fetch: Fetch::LocalRemotes,
            revision: revision.to_string(),
        });
        self
    }

    /// Add a project backed by a plain directory.
    pub fn add_project(self, path: &str, remote: &str, groups: Option<&str>) -> Self {
        self.project(path, remote, groups, ProjectKind::Directory)
    }

    /// Add a project that is listed in the manifest but not on disk.
    pub fn add_missing_project(self, path: &str, remote: &str, groups: Option<&str>) -> Self {
        self.project(path, remote, groups, ProjectKind::Missing)
    }

    /// Add a project cloned from its own bare remote (enables pull/push).
    pub fn add_git_project(self, path: &str, remote: &str, groups: Option<&str>) -> Self {
        self.project(path, remote, groups, ProjectKind::GitRepo)
    }

    /// Write this text as manifest.xml instead of generating one.
    pub fn with_raw_manifest(mut self, xml: &str) -> Self {
        self.raw_manifest = Some(xml.to_string());
        self
    }

    fn project(mut self, path: &str, remote: &str, groups: Option<&str>, kind: ProjectKind) -> Self {
        self.projects.push(ProjectSpec {
            path: path.to_string(),
            name: format!("platform/{}", path),
            remote: remote.to_string(),
            groups: groups.map(|g| g.to_string()),
            kind,
        });
        self
    }

    /// Build the workspace fixture.
    pub fn build(self) -> WorkspaceFixture {
        let temp = TempDir::new().expect("failed to create temp dir");
        let workspace_root = temp.path().join("workspace");
        let remotes_dir = temp.path().join("remotes");
        let staging_dir = temp.path().join("staging");
        fs::create_dir_all(&workspace_root).unwrap();
        fs::create_dir_all(&remotes_dir).unwrap();
        fs::create_dir_all(&staging_dir).unwrap();

        for spec in &self.projects {
            let project_path = workspace_root.join(&spec.path);
            match spec.kind {
                ProjectKind::Missing => {}
                ProjectKind::Directory => fs::create_dir_all(&project_path).unwrap(),
                ProjectKind::GitRepo => {
                    let bare_path = remotes_dir.join(&spec.path);
                    git_helpers::init_bare_repo(&bare_path);

                    // Seed the bare remote through a staging clone
                    let staging = staging_dir.join(&spec.path);
                    git_helpers::init_repo(&staging);
                    git_helpers::commit_file(
                        &staging,
                        "README.md",
                        &format!("# {}\n", spec.name),
                        "Initial commit",
                    );
                    let remote_url = format!("file://{}", bare_path.display());
                    git_helpers::add_remote(&staging, "origin", &remote_url);
                    git_helpers::push_branch(&staging, "origin", "main");

                    if let Some(parent) = project_path.parent() {
                        fs::create_dir_all(parent).unwrap();
                    }
                    git_helpers::clone_repo(&remote_url, &project_path);
                }
            }
        }

        let manifest_xml = match self.raw_manifest {
            Some(ref xml) => xml.clone(),
            None => generate_manifest(&self.remotes, &self.projects, &remotes_dir),
        };
        fs::write(workspace_root.join(MANIFEST_FILE), manifest_xml).unwrap();

        WorkspaceFixture {
            _temp: temp,
            workspace_root,
            remotes_dir,
            staging_dir,
        }
    }
}

fn generate_manifest(
    remotes: &[RemoteSpec],
    projects: &[ProjectSpec],
    remotes_dir: &std::path::Path,
) -> String {
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<manifest>\n");

    for remote in remotes {
        let fetch = match &remote.fetch {
            Fetch::Url(url) => url.clone(),
            Fetch::LocalRemotes => format!("file://{}/", remotes_dir.display()),
        };
        xml.push_str(&format!(
            "  <remote name=\"{}\" fetch=\"{}\" revision=\"{}\" />\n",
            remote.name, fetch, remote.revision
        ));
    }

    for project in projects {
        xml.push_str(&format!(
            "  <project path=\"{}\" name=\"{}\" remote=\"{}\"",
            project.path, project.name, project.remote
        ));
        if let Some(groups) = &project.groups {
            xml.push_str(&format!(" groups=\"{}\"", groups));
        }
        xml.push_str(" />\n");
    }

    xml.push_str("</manifest>\n");
    xml
}
