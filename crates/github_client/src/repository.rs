//! Repository domain types.
//!
//! This module contains the descriptor of a GitHub repository as returned by
//! `GET /repos/{owner}/{repo}`, trimmed to the fields that decide how a
//! repository policy is applied.

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;

/// The account that owns a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryOwner {
    /// The login name of the user or organization
    pub login: String,
}

/// Describes a GitHub repository.
///
/// Deserializes directly from the REST repository schema. Fields that GitHub
/// may omit (`language`, `archived`, `fork`, `private`) fall back to `None`
/// or `false`.
///
/// # Examples
///
/// ```rust
/// use github_client::RepositoryDescriptor;
///
/// let repo = RepositoryDescriptor::new("my-org", "my-repo", "R_kgDOExample")
///     .with_language(Some("JavaScript"))
///     .with_private(true);
///
/// assert_eq!(repo.full_name(), "my-org/my-repo");
/// assert_eq!(repo.normalized_language().as_deref(), Some("javascript"));
/// assert!(repo.is_private());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    /// The owner of the repository
    owner: RepositoryOwner,
    /// The name of the repository
    name: String,
    /// The GraphQL node ID of the repository
    node_id: String,
    /// The primary language detected by GitHub, if any
    #[serde(default)]
    language: Option<String>,
    /// Whether the repository is archived
    #[serde(default)]
    archived: bool,
    /// Whether the repository is a fork
    #[serde(default)]
    fork: bool,
    /// Whether the repository is private
    #[serde(default)]
    private: bool,
}

impl RepositoryDescriptor {
    /// Creates a descriptor for a public, non-archived, non-fork repository
    /// with no detected language.
    ///
    /// # Arguments
    ///
    /// * `owner` - The login of the owning user or organization
    /// * `name` - The name of the repository
    /// * `node_id` - The GraphQL node ID
    pub fn new(owner: impl Into<String>, name: impl Into<String>, node_id: impl Into<String>) -> Self {
        Self {
            owner: RepositoryOwner {
                login: owner.into(),
            },
            name: name.into(),
            node_id: node_id.into(),
            language: None,
            archived: false,
            fork: false,
            private: false,
        }
    }

    /// Sets the primary language.
    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_string);
        self
    }

    /// Sets the archived flag.
    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    /// Sets the fork flag.
    pub fn with_fork(mut self, fork: bool) -> Self {
        self.fork = fork;
        self
    }

    /// Sets the private flag.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Returns the login of the repository owner.
    pub fn owner(&self) -> &str {
        &self.owner.login
    }

    /// Returns the name of the repository (without owner).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the repository name in `owner/name` form.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner.login, self.name)
    }

    /// Returns the GraphQL node ID of the repository.
    ///
    /// # Returns
    ///
    /// A string slice containing the node ID used for GraphQL operations.
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Returns the primary language exactly as reported by GitHub.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns the primary language in lower case, or `None` when GitHub did
    /// not detect one.
    pub fn normalized_language(&self) -> Option<String> {
        self.language.as_ref().map(|l| l.to_lowercase())
    }

    /// Returns whether the repository is archived.
    pub fn is_archived(&self) -> bool {
        self.archived
    }

    /// Returns whether the repository is a fork.
    pub fn is_fork(&self) -> bool {
        self.fork
    }

    /// Returns whether the repository is private.
    ///
    /// # Returns
    ///
    /// `true` if the repository is private, `false` if it's public.
    pub fn is_private(&self) -> bool {
        self.private
    }
}
