//! Error handling for the thanks CLI.
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! Two types implement this:
//! - [`ThanksError`] - enumerated error types for all failure cases
//! - [`ErrorContext`] - wrapper that adds user-friendly messages and suggestions
//!
//! The taxonomy is deliberately small. Most conditions in this tool are not
//! errors at all: a missing token ends the run early with a diagnostic, and a
//! dependency without a descriptor or without an `<scm>` section is silently
//! skipped. Only configuration problems, Maven invocation failures, and
//! malformed descriptor documents surface here.
//!
//! Use [`user_friendly_error`] to convert any [`anyhow::Error`] into a
//! displayable context with suggestions before exiting:
//!
//! ```rust,no_run
//! use thanks_cli::core::{ThanksError, user_friendly_error};
//!
//! let error = anyhow::Error::from(ThanksError::MavenNotFound);
//! let ctx = user_friendly_error(error);
//! ctx.display(); // Shows colored error with an install suggestion
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for thanks operations.
///
/// Each variant represents a specific failure mode with enough context to
/// build a useful message. Variants map directly onto the error taxonomy of
/// the pipeline:
///
/// - **Maven invocation**: [`MavenNotFound`], [`MavenCommandError`]
/// - **Project layout**: [`ProjectNotFound`]
/// - **Descriptor parsing**: [`DescriptorParseError`] (fatal by design -
///   malformed POMs abort the run rather than being silently skipped)
/// - **Configuration**: [`ConfigError`]
///
/// I/O, TOML and HTTP transport failures stay as their library error types
/// inside `anyhow` chains; they have no dedicated variant here.
///
/// [`MavenNotFound`]: ThanksError::MavenNotFound
/// [`MavenCommandError`]: ThanksError::MavenCommandError
/// [`ProjectNotFound`]: ThanksError::ProjectNotFound
/// [`DescriptorParseError`]: ThanksError::DescriptorParseError
/// [`ConfigError`]: ThanksError::ConfigError
#[derive(Error, Debug)]
pub enum ThanksError {
    /// The `mvn` executable is not installed or not in PATH.
    #[error("Maven is not installed or not found in PATH")]
    MavenNotFound,

    /// A Maven command failed to execute or returned a non-zero exit code.
    #[error("Maven command failed: mvn {operation}")]
    MavenCommandError {
        /// The Maven goal or operation that failed (e.g. "dependency:list")
        operation: String,
        /// Standard error output from the command
        stderr: String,
    },

    /// No `pom.xml` was found at the expected project location.
    #[error("project descriptor not found: {path}")]
    ProjectNotFound {
        /// The path that was checked
        path: String,
    },

    /// A dependency's POM descriptor could not be parsed as XML.
    #[error("malformed descriptor: {reason}")]
    DescriptorParseError {
        /// Parser error message
        reason: String,
    },

    /// The global configuration is invalid or the environment is unusable.
    #[error("configuration error: {reason}")]
    ConfigError {
        /// Description of the configuration problem
        reason: String,
    },

    /// Generic error fallback for wrapped errors without a specific variant.
    #[error("{message}")]
    Other {
        /// The error message
        message: String,
    },
}

/// Error wrapper that carries user-facing context alongside the typed error.
///
/// Suggestions are actionable steps displayed in green; details provide
/// background displayed in yellow. Both are optional.
pub struct ErrorContext {
    /// The underlying thanks error
    pub error: ThanksError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`ThanksError`] with no extra info.
    #[must_use]
    pub const fn new(error: ThanksError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details about the error.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error to stderr with terminal colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl fmt::Debug for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`] for CLI display.
///
/// Recognizes [`ThanksError`] variants and attaches tailored suggestions;
/// everything else falls through to a generic context carrying the original
/// message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // downcast_ref searches the whole context chain, so this finds a typed
    // error even when it is wrapped with anyhow context
    if let Some(thanks_error) = error.downcast_ref::<ThanksError>() {
        let ctx = create_error_context(thanks_error);
        // A differing top-level rendering means context was attached on the
        // way up (e.g. the descriptor path); keep it visible as details
        if error.to_string() != thanks_error.to_string() {
            return ctx.with_details(error.to_string());
        }
        return ctx;
    }

    ErrorContext::new(ThanksError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: &ThanksError) -> ErrorContext {
    match error {
        ThanksError::MavenNotFound => ErrorContext::new(ThanksError::MavenNotFound)
            .with_suggestion("Install Maven from https://maven.apache.org/ and ensure mvn is in PATH")
            .with_details("thanks shells out to the system mvn to list resolved dependencies"),
        ThanksError::MavenCommandError { operation, stderr } => {
            ErrorContext::new(ThanksError::MavenCommandError {
                operation: operation.clone(),
                stderr: stderr.clone(),
            })
            .with_suggestion(format!("Run 'mvn {operation}' manually to inspect the failure"))
            .with_details(stderr.trim().to_string())
        }
        ThanksError::ProjectNotFound { path } => {
            ErrorContext::new(ThanksError::ProjectNotFound { path: path.clone() })
                .with_suggestion("Run thanks from a Maven project root, or point --project-dir at one")
        }
        ThanksError::DescriptorParseError { reason } => {
            ErrorContext::new(ThanksError::DescriptorParseError { reason: reason.clone() })
                .with_details("A dependency's POM in the local repository is not well-formed XML")
        }
        ThanksError::ConfigError { reason } => {
            ErrorContext::new(ThanksError::ConfigError { reason: reason.clone() })
                .with_suggestion("Check ~/.thanks/config.toml or the THANKS_CONFIG override")
        }
        ThanksError::Other { message } => ErrorContext::new(ThanksError::Other {
            message: message.clone(),
        }),
    }
}
