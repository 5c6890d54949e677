//! Error types for GitHub client operations.
//!
//! This module defines the error types that can occur when interacting with the GitHub
//! REST and GraphQL APIs through the github_client crate.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur during GitHub client operations.
///
/// Every failure of a REST or GraphQL call is reported through one of these
/// variants. Callers that apply policies across many repositories usually log
/// the error and move on; the variants exist so that they can tell a missing
/// repository apart from a permissions or rate limit problem when they need to.
///
/// ## Examples
///
/// ```rust,ignore
/// use github_client::Error;
///
/// match client.enable_vulnerability_alerts("my-org", "my-repo").await {
///     Ok(()) => println!("Vulnerability alerts enabled"),
///     Err(Error::NotFound) => eprintln!("Repository does not exist"),
///     Err(Error::RateLimitExceeded) => eprintln!("Rate limit exceeded, retry later"),
///     Err(err) => eprintln!("Other error: {}", err),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GitHub API request failed.
    ///
    /// The contained string is the message returned by GitHub, or a description
    /// of the transport failure when no response was received.
    #[error("API request failed: {0}")]
    ApiError(String),

    /// Authentication or GitHub client initialization failure.
    ///
    /// This error occurs when:
    /// - The access token is missing or malformed
    /// - The configured API base URI is not a valid URI
    #[error("Failed to authenticate or initialize GitHub client: {0}")]
    AuthError(String),

    /// Error deserializing the response from GitHub.
    #[error("Failed to deserialize GitHub response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The GraphQL endpoint accepted the request but reported errors.
    ///
    /// GitHub returns HTTP 200 for GraphQL requests that fail validation or
    /// permission checks, listing the problems in the `errors` array. The
    /// contained vector holds the message of each reported error.
    #[error("GraphQL request failed: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The GitHub API returned a response in an unexpected format.
    ///
    /// For GraphQL requests this means the response carried neither `data`
    /// nor `errors`.
    #[error("Invalid response format")]
    InvalidResponse,

    /// The requested resource was not found.
    ///
    /// This error occurs when a REST request returns a 404 status code, or when
    /// a GraphQL query resolves the requested repository to `null`.
    #[error("Resource not found")]
    NotFound,

    /// GitHub API rate limit has been exceeded.
    ///
    /// Retry scheduling is left to the caller.
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}
