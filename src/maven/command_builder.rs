//! Type-safe Maven command builder for consistent command execution
//!
//! This module provides a fluent API for building and executing Maven
//! commands, ensuring consistent error handling, timeouts, and logging for
//! every `mvn` invocation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

use crate::constants::MVN_TIMEOUT;
use crate::core::ThanksError;

/// Builder for constructing and executing Maven commands.
///
/// Handles executable lookup, batch mode, working directory, environment
/// variables, timeout management, and captured output in one place so the
/// rest of the crate never touches [`tokio::process::Command`] directly.
///
/// # Defaults
///
/// - **Batch mode**: `-B` is always passed (no interactive prompts, no
///   ANSI color in the output being parsed)
/// - **Timeout**: 5 minutes
/// - **Output capture**: enabled
/// - **Working directory**: current process directory
///
/// # Examples
///
/// ```rust,ignore
/// use thanks_cli::maven::command_builder::MvnCommand;
///
/// # async fn example() -> anyhow::Result<()> {
/// let output = MvnCommand::new()
///     .arg("dependency:list")
///     .current_dir("/path/to/project")
///     .execute()
///     .await?;
/// println!("{}", output.stdout);
/// # Ok(())
/// # }
/// ```
pub struct MvnCommand {
    /// Arguments to pass to Maven after `-B` (e.g. ["dependency:list"])
    args: Vec<String>,

    /// Working directory for command execution (defaults to current directory)
    current_dir: Option<PathBuf>,

    /// Environment variables to set for the Maven process
    env_vars: Vec<(String, String)>,

    /// Maximum duration to wait for command completion (None = no timeout)
    timeout_duration: Option<Duration>,
}

impl Default for MvnCommand {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            current_dir: None,
            env_vars: Vec::new(),
            timeout_duration: Some(MVN_TIMEOUT),
        }
    }
}

impl MvnCommand {
    /// Creates a new Maven command builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the working directory for command execution.
    ///
    /// This should be the Maven project root (the directory containing
    /// `pom.xml`); Maven itself resolves modules from there.
    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Adds a single argument to the Maven command.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments to the Maven command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds an environment variable for the Maven process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.push((key.into(), value.into()));
        self
    }

    /// Set a custom timeout for the command (None for no timeout).
    pub const fn with_timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout_duration = duration;
        self
    }

    /// Execute the command and return its captured output.
    ///
    /// Returns [`ThanksError::MavenNotFound`] when no `mvn` executable can
    /// be located, and [`ThanksError::MavenCommandError`] on non-zero exit
    /// or timeout.
    pub async fn execute(self) -> Result<MvnOutput> {
        let start = std::time::Instant::now();
        let mvn = mvn_executable()?;
        let mut cmd = Command::new(&mvn);

        // -B keeps the output free of prompts and escape sequences
        let mut full_args = vec!["-B".to_string()];
        full_args.extend(self.args.clone());
        cmd.args(&full_args);

        if let Some(ref dir) = self.current_dir {
            cmd.current_dir(dir);
        }

        tracing::debug!(
            target: "maven",
            "Executing command: {} {}",
            mvn.display(),
            full_args.join(" ")
        );

        for (key, value) in &self.env_vars {
            tracing::trace!(target: "maven", "Setting env var: {}={}", key, value);
            cmd.env(key, value);
        }

        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        cmd.stdin(Stdio::null());

        let operation = self.args.first().cloned().unwrap_or_else(|| "unknown".to_string());

        let output_future = cmd.output();
        let output = if let Some(duration) = self.timeout_duration {
            match timeout(duration, output_future).await {
                Ok(result) => result
                    .context(format!("Failed to execute mvn {}", full_args.join(" ")))?,
                Err(_) => {
                    tracing::warn!(
                        target: "maven",
                        "Command timed out after {} seconds: mvn {}",
                        duration.as_secs(),
                        full_args.join(" ")
                    );
                    return Err(ThanksError::MavenCommandError {
                        operation,
                        stderr: format!(
                            "Maven command timed out after {} seconds. Try running it manually: mvn {}",
                            duration.as_secs(),
                            full_args.join(" ")
                        ),
                    }
                    .into());
                }
            }
        } else {
            output_future
                .await
                .context(format!("Failed to execute mvn {}", full_args.join(" ")))?
        };

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            tracing::debug!(
                target: "maven",
                "Command failed with exit code: {:?}",
                output.status.code()
            );
            // Maven reports most failures on stdout, not stderr
            let reason = if stderr.trim().is_empty() { stdout } else { stderr };
            return Err(ThanksError::MavenCommandError {
                operation,
                stderr: reason,
            }
            .into());
        }

        let elapsed = start.elapsed();
        if elapsed.as_secs() > 1 {
            tracing::debug!(
                target: "maven::perf",
                "mvn {} took {:.2}s",
                operation,
                elapsed.as_secs_f64()
            );
        }

        Ok(MvnOutput { stdout, stderr })
    }
}

/// Captured output of a successful Maven invocation.
pub struct MvnOutput {
    /// Standard output
    pub stdout: String,
    /// Standard error
    pub stderr: String,
}

/// Locate the Maven executable on the current platform.
fn mvn_executable() -> Result<PathBuf> {
    which::which("mvn")
        .or_else(|_| which::which("mvn.cmd"))
        .map_err(|_| ThanksError::MavenNotFound.into())
}
