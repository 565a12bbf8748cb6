//! Push command implementation

use crate::cli::context::WorkspaceContext;
use crate::cli::output::Output;
use crate::cli::repo_iter::{for_each_project, RepoOpSummary};
use crate::git::{self, GitError, GitRunner};

/// Run the push driver
///
/// Every project is pushed to `<remote fetch><path>` at the remote's (or
/// the project's own) revision. A project whose remote cannot be resolved
/// is reported without invoking git.
pub fn run_push(ctx: &WorkspaceContext, runner: &dyn GitRunner) -> RepoOpSummary {
    let manifest = &ctx.manifest;

    if !ctx.quiet {
        Output::header(&format!(
            "Pushing {} projects...",
            manifest.projects.len()
        ));
    }

    for_each_project(&manifest.projects, ctx.root(), "pushing", ctx.quiet, |project, repo| {
        let destination = manifest.push_destination(project);
        if destination.is_empty() {
            return Err(GitError::UnknownRemote(project.remote.clone()));
        }

        git::push(runner, &repo.absolute_path, &destination)?;

        Ok(format!("{}: pushed to {}", Output::repo_name(&repo.name), destination))
    })
}
