//! Git branch operations

use std::path::Path;

use super::{GitError, GitRunner};

/// Check out a branch or tag
pub fn checkout(runner: &dyn GitRunner, repo: &Path, branch_or_tag: &str) -> Result<(), GitError> {
    runner.run(repo, &["checkout", branch_or_tag])
}
