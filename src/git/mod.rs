//! Git operations wrapper
//!
//! Every git invocation goes through a [`GitRunner`]. The production
//! runner, [`SystemGit`], shells out to the `git` binary on `PATH` and blocks
//! until it exits. Tests substitute a runner that records invocations
//! instead of spawning anything.

pub mod branch;
pub mod remote;

pub use branch::checkout;
pub use remote::{pull, push, upstream_url};

use crate::util::{describe_cmd, log_cmd};
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors that can occur while processing one project
#[derive(Error, Debug)]
pub enum GitError {
    #[error("repository not found in path: {0}")]
    NotFound(String),

    #[error("no fetch URL for remote '{0}'")]
    UnknownRemote(String),

    #[error("{0}")]
    OperationFailed(String),
}

/// Runs a git subcommand against one repository.
pub trait GitRunner {
    /// Run `git -C <repo> <args...>` to completion.
    fn run(&self, repo: &Path, args: &[&str]) -> Result<(), GitError>;
}

impl<F> GitRunner for F
where
    F: Fn(&Path, &[&str]) -> Result<(), GitError>,
{
    fn run(&self, repo: &Path, args: &[&str]) -> Result<(), GitError> {
        self(repo, args)
    }
}

/// Runner backed by the system `git` executable
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: PathBuf,
}

impl SystemGit {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific executable instead of `git` from `PATH`
    pub fn with_program<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemGit {
    fn default() -> Self {
        Self::new()
    }
}

impl GitRunner for SystemGit {
    fn run(&self, repo: &Path, args: &[&str]) -> Result<(), GitError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-C").arg(repo).args(args);
        log_cmd(&cmd);

        let output = cmd
            .output()
            .map_err(|e| GitError::OperationFailed(format!("{}: {}", describe_cmd(&cmd), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(GitError::OperationFailed(format!(
                "{} failed ({}): {}",
                describe_cmd(&cmd),
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

/// Locate the `git` executable on `PATH`
pub fn find_git() -> Option<PathBuf> {
    which::which("git").ok()
}
