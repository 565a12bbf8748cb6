//! Merge command implementation
//!
//! Checks out a branch or tag in every project of the merge group, then
//! pulls the same ref from the upstream host. Nothing is rolled back: a
//! project whose pull fails stays on the checked-out ref.

use tracing::debug;

use crate::cli::context::WorkspaceContext;
use crate::cli::output::Output;
use crate::cli::repo_iter::{for_each_project, RepoOpSummary};
use crate::git::{self, GitRunner};

/// Group tag that selects projects for merging
pub const DEFAULT_MERGE_GROUP: &str = "aosp-platform";
/// Host merged projects are pulled from
pub const DEFAULT_UPSTREAM: &str = "https://android.googlesource.com";
/// Ref merged when `-b` is not given
pub const DEFAULT_BRANCH: &str = "master";

/// Settings for one merge run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Branch or tag to check out and pull
    pub branch: String,
    /// Only projects whose group tag equals this are merged
    pub group: String,
    /// Upstream host; the project path is appended to it
    pub upstream: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            branch: DEFAULT_BRANCH.to_string(),
            group: DEFAULT_MERGE_GROUP.to_string(),
            upstream: DEFAULT_UPSTREAM.to_string(),
        }
    }
}

/// Run the merge driver
pub fn run_merge(
    ctx: &WorkspaceContext,
    runner: &dyn GitRunner,
    options: &MergeOptions,
) -> RepoOpSummary {
    let projects: Vec<_> = ctx.manifest.projects_in_group(&options.group).collect();

    if !ctx.quiet {
        Output::header(&format!(
            "Merging {} into {} '{}' projects...",
            Output::branch_name(&options.branch),
            projects.len(),
            options.group
        ));
    }
    debug!(upstream = %options.upstream, branch = %options.branch, "merge");

    for_each_project(projects, ctx.root(), "merging", ctx.quiet, |project, repo| {
        git::checkout(runner, &repo.absolute_path, &options.branch)?;

        let url = git::upstream_url(&options.upstream, &project.path);
        git::pull(runner, &repo.absolute_path, &url, &options.branch)?;

        Ok(format!(
            "{}: merged {} from {}",
            Output::repo_name(&repo.name),
            Output::branch_name(&options.branch),
            url
        ))
    })
}
