//! Git remote operations

use std::path::Path;

use super::{GitError, GitRunner};

/// Join an upstream host and a project path with exactly one `/`
pub fn upstream_url(upstream: &str, project_path: &str) -> String {
    format!(
        "{}/{}",
        upstream.trim_end_matches('/'),
        project_path.trim_start_matches('/')
    )
}

/// Pull `branch_or_tag` from `url` into the current branch
pub fn pull(
    runner: &dyn GitRunner,
    repo: &Path,
    url: &str,
    branch_or_tag: &str,
) -> Result<(), GitError> {
    runner.run(repo, &["pull", url, branch_or_tag])
}

/// Push to a manifest destination (`<url> <revision>`).
///
/// Each whitespace-separated token of the destination becomes its own
/// argument, so git sees the URL and the refspec separately.
pub fn push(runner: &dyn GitRunner, repo: &Path, destination: &str) -> Result<(), GitError> {
    let mut args = vec!["push"];
    args.extend(destination.split_whitespace());
    runner.run(repo, &args)
}
