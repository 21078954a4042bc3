//! Core types for the thanks CLI.
//!
//! This module hosts the pieces shared across the pipeline:
//! - [`error`] - the [`ThanksError`] taxonomy and user-friendly error display
//! - [`repo`] - the [`RepoRef`] normalized repository reference
//!
//! Everything else in the crate is a pipeline stage that produces or consumes
//! these types.

pub mod error;
pub mod repo;

pub use error::{ErrorContext, ThanksError, user_friendly_error};
pub use repo::RepoRef;
