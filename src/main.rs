//! repomerge CLI entry point

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::path::Path;

use repomerge::cli::commands::merge::{
    run_merge, MergeOptions, DEFAULT_BRANCH, DEFAULT_MERGE_GROUP, DEFAULT_UPSTREAM,
};
use repomerge::cli::commands::push::run_push;
use repomerge::cli::{Output, WorkspaceContext};
use repomerge::core::manifest::{Manifest, MANIFEST_FILE};
use repomerge::git::{find_git, SystemGit};
use repomerge::telemetry::{init_telemetry, TelemetryConfig};

#[derive(Parser)]
#[command(name = "repomerge")]
#[command(
    author,
    version,
    about = "Merge and push the repositories of an Android repo manifest",
    long_about = "Reads manifest.xml from the current directory. With --merge-all, every \
                  project in the merge group is checked out at -b and pulled from the \
                  upstream host. With -p, every project is pushed to its manifest remote."
)]
struct Cli {
    /// Merge all repositories defined in the manifest
    #[arg(long = "merge-all")]
    merge_all: bool,

    /// Push repositories after merge
    #[arg(short = 'p')]
    push: bool,

    /// Branch or tag to merge from
    #[arg(short = 'b', value_name = "BRANCH", default_value = DEFAULT_BRANCH)]
    branch: String,

    /// Group tag selecting the projects to merge
    #[arg(long, env = "REPOMERGE_GROUP", default_value = DEFAULT_MERGE_GROUP)]
    group: String,

    /// Upstream host merged projects are pulled from
    #[arg(long, env = "REPOMERGE_UPSTREAM", default_value = DEFAULT_UPSTREAM)]
    upstream: String,

    /// Log every git command
    #[arg(short, long)]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "repomerge", &mut std::io::stdout());
        return Ok(());
    }

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    let _guard = match init_telemetry(&telemetry) {
        Ok(guard) => Some(guard),
        Err(e) => {
            Output::warning(&format!("Logging disabled: {}", e));
            None
        }
    };

    let manifest =
        Manifest::load(Path::new(MANIFEST_FILE)).context("Error reading manifest file")?;
    let workspace_root =
        std::env::current_dir().context("Error getting current working directory")?;

    if (cli.merge_all || cli.push) && find_git().is_none() {
        Output::warning("git executable not found on PATH; every project will fail");
    }

    let mut ctx = WorkspaceContext::new(workspace_root, manifest);
    ctx.quiet = cli.quiet;

    let runner = SystemGit::new();

    if cli.merge_all {
        let options = MergeOptions {
            branch: cli.branch,
            group: cli.group,
            upstream: cli.upstream,
        };
        run_merge(&ctx, &runner, &options);
    }

    if cli.push {
        run_push(&ctx, &runner);
    }

    Ok(())
}
