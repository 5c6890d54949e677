//! Error types for policy application.

use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors raised inside a single policy phase.
///
/// These never leave [`crate::RepositoryPolicyApplier`]: each phase converts
/// its error into a log record and a [`crate::PhaseOutcome::Failed`] entry.
#[derive(Error, Debug)]
pub enum Error {
    /// A GitHub API call failed.
    #[error("GitHub operation failed: {0}")]
    GitHub(#[from] github_client::Error),
}

/// Result type for policy phases.
pub type PolicyResult<T> = Result<T, Error>;
