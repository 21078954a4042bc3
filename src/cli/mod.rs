//! Command-line interface and pipeline orchestration for thanks.
//!
//! The tool is a single command, so there is no subcommand enum: the
//! [`Cli`] struct holds every flag and [`Cli::execute`] drives the whole
//! pipeline:
//!
//! 1. Resolve the GitHub token; without one, print a diagnostic and finish
//!    successfully without touching the network or the project.
//! 2. Resolve declared build plugins through the lookup table, scan the
//!    resolved dependency graph (transitive by default, `--direct` to
//!    restrict), extract repository references from descriptors, and union
//!    everything into one deduplicated set.
//! 3. Report "none found" for an empty set, otherwise star the set
//!    sequentially with per-repository error isolation.
//!
//! All user-facing status output is plain line-oriented `println!`;
//! diagnostics and instrumentation go to stderr via `tracing`.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config;
use crate::constants::GITHUB_TOKEN_VAR;
use crate::core::{RepoRef, ThanksError};
use crate::descriptor;
use crate::github::{self, StarClient};
use crate::maven::{self, DependencyScope};
use crate::plugins::{self, PluginRepos};
use crate::scm;

/// Star the GitHub repositories behind your Maven dependencies.
///
/// Inspects the resolved dependency graph of a Maven project, extracts the
/// GitHub repository from each dependency's POM descriptor, and stars every
/// repository the authenticated user has not starred yet.
#[derive(Parser, Debug)]
#[command(
    name = "thanks",
    about = "Say thanks to the libraries you depend on in form of a GitHub star",
    version
)]
pub struct Cli {
    /// GitHub token used for star requests.
    ///
    /// Falls back to `github_token` in the global config, then the
    /// `GITHUB_TOKEN` environment variable. Without a token the run prints
    /// a diagnostic and ends successfully without any network call.
    #[arg(short, long)]
    token: Option<String>,

    /// Scan only direct dependencies instead of the full transitive set.
    #[arg(long)]
    direct: bool,

    /// Maven project root (the directory containing pom.xml).
    #[arg(long, default_value = ".")]
    project_dir: PathBuf,

    /// Local repository override (defaults to ~/.m2/repository).
    #[arg(long)]
    local_repo: Option<PathBuf>,

    /// Path to the global config file (defaults to ~/.thanks/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress log output; status lines are still printed.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Initialize the tracing subscriber according to the verbosity flags.
    ///
    /// An explicit `RUST_LOG` wins over the flag-derived default level.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }
        let default_level = if self.verbose { "debug" } else { "info" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the pipeline.
    pub async fn execute(self) -> Result<()> {
        let Some(token) = config::resolve_token(self.token.clone(), self.config.clone()).await?
        else {
            println!(
                "No GitHub token found. Pass --token, set {GITHUB_TOKEN_VAR}, \
                 or add github_token to the global config"
            );
            return Ok(());
        };

        let repositories = self.collect_repositories().await?;
        if repositories.is_empty() {
            println!("No GitHub repositories found in dependencies");
            return Ok(());
        }

        println!("Starring GitHub repositories from dependencies");
        let client = StarClient::new(token)?;
        github::star_all(&client, &repositories).await;
        Ok(())
    }

    /// Build the deduplicated repository set from plugins and dependencies.
    async fn collect_repositories(&self) -> Result<BTreeSet<RepoRef>> {
        let pom = self.project_dir.join("pom.xml");
        if !pom.is_file() {
            return Err(ThanksError::ProjectNotFound {
                path: pom.display().to_string(),
            }
            .into());
        }

        let mut repositories = BTreeSet::new();

        // Plugin-derived repositories first, then the dependency scan
        let table = PluginRepos::default();
        for plugin_id in plugins::declared_plugins(&pom).await? {
            match table.resolve(&plugin_id) {
                Some(repo) => {
                    repositories.insert(repo);
                }
                None => tracing::debug!("no repository mapping for plugin {plugin_id}"),
            }
        }

        let scope =
            if self.direct { DependencyScope::Direct } else { DependencyScope::Transitive };
        let local_repo = match &self.local_repo {
            Some(path) => path.clone(),
            None => descriptor::default_local_repository().ok_or_else(|| {
                ThanksError::ConfigError {
                    reason: "could not determine home directory".to_string(),
                }
            })?,
        };

        for coordinate in maven::list_dependencies(&self.project_dir, scope).await? {
            let Some(pom_path) = descriptor::find_pom(&coordinate, &local_repo) else {
                tracing::debug!("no descriptor for {coordinate}");
                continue;
            };
            let xml = tokio::fs::read_to_string(&pom_path)
                .await
                .with_context(|| format!("failed to read descriptor {}", pom_path.display()))?;
            let repo = scm::extract_repo(&xml)
                .with_context(|| format!("failed to parse descriptor {}", pom_path.display()))?;
            if let Some(repo) = repo {
                repositories.insert(repo);
            }
        }

        Ok(repositories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_transitive_scan_of_current_directory() {
        let cli = Cli::parse_from(["thanks"]);
        assert!(!cli.direct);
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert!(cli.token.is_none());
        assert!(cli.local_repo.is_none());
    }

    #[test]
    fn direct_flag_restricts_the_scan() {
        let cli = Cli::parse_from(["thanks", "--direct"]);
        assert!(cli.direct);
    }

    #[test]
    fn token_and_paths_are_parsed() {
        let cli = Cli::parse_from([
            "thanks",
            "--token",
            "ghp_x",
            "--project-dir",
            "/proj",
            "--local-repo",
            "/repo",
        ]);
        assert_eq!(cli.token.as_deref(), Some("ghp_x"));
        assert_eq!(cli.project_dir, PathBuf::from("/proj"));
        assert_eq!(cli.local_repo, Some(PathBuf::from("/repo")));
    }

    #[test]
    fn verbose_and_quiet_are_mutually_exclusive() {
        assert!(Cli::try_parse_from(["thanks", "--verbose", "--quiet"]).is_err());
    }
}
