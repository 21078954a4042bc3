//! Global constants used throughout the thanks codebase.
//!
//! This module contains the GitHub API endpoint, timeout durations, and the
//! environment variable names consulted at runtime. Defining them centrally
//! improves maintainability and makes magic values more discoverable.

use std::time::Duration;

/// Base URL of the GitHub REST API.
///
/// Tests override the base URL on the client instead of patching this value.
pub const GITHUB_API: &str = "https://api.github.com";

/// Connect and total timeout applied to every GitHub API request (10 seconds).
///
/// There is exactly one timeout and no retry or backoff: a hung connection
/// blocks the sequential star loop for at most this long.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for Maven invocations (5 minutes).
///
/// `mvn dependency:list` may resolve artifacts over the network on a cold
/// local repository, which can take far longer than any single HTTP call.
pub const MVN_TIMEOUT: Duration = Duration::from_secs(300);

/// Environment variable supplying the GitHub token when neither the
/// `--token` flag nor the global config provides one.
pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Environment variable overriding the global config file location
/// (`~/.thanks/config.toml` by default).
pub const CONFIG_PATH_VAR: &str = "THANKS_CONFIG";

/// User agent sent with every GitHub API request.
///
/// The GitHub API rejects requests without a user agent.
pub const USER_AGENT: &str = concat!("thanks/", env!("CARGO_PKG_VERSION"));

/// Group id Maven assumes when a plugin declaration omits `<groupId>`.
pub const DEFAULT_PLUGIN_GROUP: &str = "org.apache.maven.plugins";
