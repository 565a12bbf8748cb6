//! Project iteration helper
//!
//! Both drivers walk projects the same way: resolve the local path, skip
//! with an error if it is missing, run the operation, report the outcome.
//! A failure is confined to its project; the loop always continues.

use std::path::Path;

use tracing::debug;

use crate::cli::output::Output;
use crate::core::manifest::Project;
use crate::core::repo::RepoInfo;
use crate::git::GitError;

/// Summary of a batch project operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RepoOpSummary {
    pub success_count: usize,
    pub error_count: usize,
}

impl RepoOpSummary {
    pub fn total(&self) -> usize {
        self.success_count + self.error_count
    }
}

/// Run `op` for each project in order.
///
/// `verb` names the operation in progress and error lines, e.g. `merging`
/// gives `Error merging <name>: <error>`. Projects whose directory does not
/// exist fail with [`GitError::NotFound`] without reaching `op`.
pub fn for_each_project<'a, I, F>(
    projects: I,
    workspace_root: &Path,
    verb: &str,
    quiet: bool,
    mut op: F,
) -> RepoOpSummary
where
    I: IntoIterator<Item = &'a Project>,
    F: FnMut(&Project, &RepoInfo) -> Result<String, GitError>,
{
    let mut summary = RepoOpSummary::default();

    for project in projects {
        let repo = RepoInfo::from_project(project, workspace_root);
        debug!(project = %repo.name, path = %repo.absolute_path.display(), "{}", verb);

        let result = if repo.exists() {
            let spinner =
                Output::spinner_unless_quiet(quiet, &format!("{} {}...", verb, repo.name));
            let result = op(project, &repo);
            spinner.finish_and_clear();
            result
        } else {
            Err(GitError::NotFound(repo.absolute_path.display().to_string()))
        };

        match result {
            Ok(msg) => {
                if !quiet {
                    Output::success(&msg);
                }
                summary.success_count += 1;
            }
            Err(e) => {
                debug!(project = %repo.name, error = %e, "{} failed", verb);
                Output::error(&format!("Error {} {}: {}", verb, project.name, e));
                summary.error_count += 1;
            }
        }
    }

    summary
}
