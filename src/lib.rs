//! Thanks - star the GitHub repositories your build depends on
//!
//! `thanks` inspects a Maven build's resolved dependency graph, extracts the
//! source-control URL from each dependency's POM descriptor, and stars the
//! corresponding GitHub repository for the authenticated user. Build plugins
//! declared in the project's `pom.xml` are resolved to repositories as well
//! through a small lookup table.
//!
//! # Pipeline Overview
//!
//! The whole tool is one linear, sequential pipeline:
//!
//! 1. Resolve a GitHub token (`--token` flag, global config, `GITHUB_TOKEN`).
//!    Without one the run ends early with a diagnostic - no network calls.
//! 2. Collect dependency coordinates from `mvn dependency:list` (transitive
//!    by default, direct-only with `--direct`) across all modules.
//! 3. Locate each coordinate's POM in the local repository
//!    (`~/.m2/repository`); coordinates without a descriptor are skipped.
//! 4. Parse the `<scm>` section out of each POM and normalize the embedded
//!    `github.com` URL into an `owner/repo` reference.
//! 5. Union dependency- and plugin-derived references into one deduplicated
//!    set, then walk it: already-starred repositories are reported, the rest
//!    are starred via `PUT /user/starred/{owner}/{repo}`.
//!
//! A 401 from the star endpoint stops the remaining iteration; any other
//! per-repository failure (bad status, network error) is reported and the
//! loop continues. There are no retries and no persisted state.
//!
//! # Core Modules
//!
//! - [`cli`] - Command-line interface and orchestration of the pipeline
//! - [`config`] - Global (~/.thanks/config.toml) configuration and token resolution
//! - [`core`] - Error handling and the `RepoRef` repository reference type
//! - [`maven`] - Maven invocation wrapper and dependency-list parsing
//! - [`descriptor`] - Local-repository POM lookup for resolved coordinates
//! - [`scm`] - `<scm>` section extraction and URL normalization
//! - [`plugins`] - Declared-plugin collection and the plugin-to-repository table
//! - [`github`] - GitHub star API client and the star loop
//!
//! # Command-Line Usage
//!
//! ```bash
//! # Star repositories of the full transitive dependency set
//! thanks
//!
//! # Only direct dependencies
//! thanks --direct
//!
//! # Explicit token and project location
//! thanks --token ghp_xxxx --project-dir ./service
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod descriptor;
pub mod github;
pub mod maven;
pub mod plugins;
pub mod scm;
