use thiserror::Error;

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur in the repo-policy CLI application.
///
/// Failures inside a policy phase are not represented here; the applier logs
/// them and carries on.
#[derive(Error, Debug)]
pub enum Error {
    /// Authentication error occurred while building the GitHub client.
    ///
    /// This error is returned when no token is available or the API base URI
    /// is invalid.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Configuration error occurred while loading or parsing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A repository could not be resolved before applying the policy.
    #[error("Failed to resolve repository {repository}: {source}")]
    Repository {
        repository: String,
        #[source]
        source: github_client::Error,
    },
}
