//! Crate for interacting with the GitHub REST and GraphQL APIs.
//!
//! This crate provides a client for the calls needed to bring a repository in
//! line with a branch protection and settings policy: listing, creating and
//! updating branch protection rules through GraphQL, and toggling security
//! features and repository settings through REST.

use async_trait::async_trait;
use http::StatusCode;
use octocrab::{service::middleware::retry::RetryConfig, Octocrab, Result as OctocrabResult};
use serde_json::json;
use tracing::{debug, error, info, instrument};

pub mod branch_protection;
pub use branch_protection::{
    BranchProtectionRule, BranchProtectionRuleInput, RequiredStatusCheck,
    RequiredStatusCheckInput, StatusCheckApp,
};

pub mod errors;
pub use errors::Error;

pub mod graphql;
use graphql::{
    BranchProtectionRulesData, GraphQlResponse, BRANCH_PROTECTION_RULE_LIMIT,
    CREATE_BRANCH_PROTECTION_RULE_MUTATION, CREATE_PROTECTION_CLIENT_MUTATION_ID,
    LIST_BRANCH_PROTECTION_RULES_QUERY, UPDATE_BRANCH_PROTECTION_RULE_MUTATION,
    UPDATE_PROTECTION_CLIENT_MUTATION_ID,
};

pub mod repository;
pub use repository::{RepositoryDescriptor, RepositoryOwner};

pub mod repository_settings;
pub use repository_settings::{
    RepositorySettingsUpdate, SecurityAndAnalysis, SecurityFeature, SecurityFeatureStatus,
};

use branch_protection::{CreateBranchProtectionRuleInput, UpdateBranchProtectionRuleInput};

// Reference the tests module in the separate file
#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// A client for interacting with the GitHub API.
#[derive(Debug)]
pub struct GitHubClient {
    client: Octocrab,
}

impl GitHubClient {
    /// Creates a new `GitHubClient` from an authenticated `Octocrab` instance.
    ///
    /// # Arguments
    ///
    /// * `client` - An `Octocrab` client, see [`create_token_client`].
    pub fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Runs a GraphQL document and decodes its `data` payload.
    async fn graphql<T>(
        &self,
        operation: &str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let payload = json!({ "query": query, "variables": variables });
        let response: OctocrabResult<GraphQlResponse<serde_json::Value>> =
            self.client.graphql(&payload).await;
        let data = match response {
            Ok(r) => r.into_data().map_err(|e| {
                error!(operation = operation, error = %e, "GraphQL request returned errors");
                e
            })?,
            Err(e) => return Err(map_octocrab_error(operation, e)),
        };

        let decoded = serde_json::from_value(data).map_err(|e| {
            error!(operation = operation, error = %e, "Unexpected GraphQL data shape");
            e
        })?;
        Ok(decoded)
    }

    /// Sends a body-less `PUT` to a REST endpoint that answers `204 No Content`.
    async fn put_no_content(&self, operation: &str, path: String) -> Result<(), Error> {
        debug!("Making API call to: {}", path);
        let response = match self.client._put(path, None::<&()>).await {
            Ok(r) => r,
            Err(e) => return Err(map_octocrab_error(operation, e)),
        };

        match octocrab::map_github_error(response).await {
            Ok(_) => Ok(()),
            Err(e) => Err(map_octocrab_error(operation, e)),
        }
    }
}

#[async_trait]
impl RepositoryClient for GitHubClient {
    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDescriptor, Error> {
        let path = format!("/repos/{}/{}", owner, repo);
        let result: OctocrabResult<RepositoryDescriptor> = self.client.get(path, None::<&()>).await;
        match result {
            Ok(r) => Ok(r),
            Err(e) => Err(map_octocrab_error("Failed to get repository", e)),
        }
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn list_branch_protection_rules(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<BranchProtectionRule>, Error> {
        let data: BranchProtectionRulesData = self
            .graphql(
                "Failed to list branch protection rules",
                LIST_BRANCH_PROTECTION_RULES_QUERY,
                json!({ "owner": owner, "repo": repo, "first": BRANCH_PROTECTION_RULE_LIMIT }),
            )
            .await?;

        let rules = data.into_rules()?;
        debug!(count = rules.len(), "Retrieved branch protection rules");
        Ok(rules)
    }

    #[instrument(skip(self, rule), fields(repository_id = %repository_id, pattern = %rule.pattern))]
    async fn create_branch_protection_rule(
        &self,
        repository_id: &str,
        rule: &BranchProtectionRuleInput,
    ) -> Result<(), Error> {
        let input = CreateBranchProtectionRuleInput {
            client_mutation_id: CREATE_PROTECTION_CLIENT_MUTATION_ID,
            repository_id,
            rule,
        };

        let _: serde_json::Value = self
            .graphql(
                "Failed to create branch protection rule",
                CREATE_BRANCH_PROTECTION_RULE_MUTATION,
                json!({ "input": input }),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self, rule), fields(rule_id = %rule_id, pattern = %rule.pattern))]
    async fn update_branch_protection_rule(
        &self,
        rule_id: &str,
        rule: &BranchProtectionRuleInput,
    ) -> Result<(), Error> {
        let input = UpdateBranchProtectionRuleInput {
            client_mutation_id: UPDATE_PROTECTION_CLIENT_MUTATION_ID,
            branch_protection_rule_id: rule_id,
            rule,
        };

        let _: serde_json::Value = self
            .graphql(
                "Failed to update branch protection rule",
                UPDATE_BRANCH_PROTECTION_RULE_MUTATION,
                json!({ "input": input }),
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn enable_vulnerability_alerts(&self, owner: &str, repo: &str) -> Result<(), Error> {
        self.put_no_content(
            "Failed to enable vulnerability alerts",
            format!("/repos/{}/{}/vulnerability-alerts", owner, repo),
        )
        .await
    }

    #[instrument(skip(self), fields(owner = %owner, repo = %repo))]
    async fn enable_automated_security_fixes(&self, owner: &str, repo: &str) -> Result<(), Error> {
        self.put_no_content(
            "Failed to enable automated security fixes",
            format!("/repos/{}/{}/automated-security-fixes", owner, repo),
        )
        .await
    }

    #[instrument(skip(self, settings), fields(owner = %owner, repo = %repo))]
    async fn update_repository_settings(
        &self,
        owner: &str,
        repo: &str,
        settings: &RepositorySettingsUpdate,
    ) -> Result<(), Error> {
        let path = format!("/repos/{}/{}", owner, repo);
        let response: OctocrabResult<serde_json::Value> =
            self.client.patch(path, Some(settings)).await;
        match response {
            Ok(_) => Ok(()),
            Err(e) => Err(map_octocrab_error("Failed to update repository settings", e)),
        }
    }
}

/// Trait for the repository operations needed to apply a repository policy.
///
/// Every method performs exactly one API call and does not retry.
#[async_trait]
pub trait RepositoryClient: Send + Sync {
    /// Fetches the descriptor of a repository.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if the repository does not exist or is not visible.
    async fn get_repository(&self, owner: &str, repo: &str) -> Result<RepositoryDescriptor, Error>;

    /// Lists up to five branch protection rules of a repository, in the order
    /// GitHub returns them.
    ///
    /// # Errors
    /// Returns `Error::NotFound` if the repository resolves to `null`, and
    /// `Error::GraphQl` if GitHub reports errors for the query.
    async fn list_branch_protection_rules(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<Vec<BranchProtectionRule>, Error>;

    /// Creates a branch protection rule on the repository with the given node ID.
    ///
    /// # Arguments
    ///
    /// * `repository_id` - The GraphQL node ID of the repository.
    /// * `rule` - The pattern and protection settings of the new rule.
    async fn create_branch_protection_rule(
        &self,
        repository_id: &str,
        rule: &BranchProtectionRuleInput,
    ) -> Result<(), Error>;

    /// Overwrites an existing branch protection rule.
    ///
    /// # Arguments
    ///
    /// * `rule_id` - The GraphQL node ID of the rule.
    /// * `rule` - The pattern and protection settings to write.
    async fn update_branch_protection_rule(
        &self,
        rule_id: &str,
        rule: &BranchProtectionRuleInput,
    ) -> Result<(), Error>;

    /// Enables Dependabot vulnerability alerts. Idempotent.
    async fn enable_vulnerability_alerts(&self, owner: &str, repo: &str) -> Result<(), Error>;

    /// Enables Dependabot automated security fixes. Idempotent.
    async fn enable_automated_security_fixes(&self, owner: &str, repo: &str) -> Result<(), Error>;

    /// Updates settings for a specific repository using the REST API directly.
    ///
    /// Only the fields provided in the `settings` argument will be updated.
    ///
    /// # Arguments
    ///
    /// * `owner` - The owner of the repository (user or organization name).
    /// * `repo` - The name of the repository.
    /// * `settings` - A `RepositorySettingsUpdate` struct containing the desired changes.
    async fn update_repository_settings(
        &self,
        owner: &str,
        repo: &str,
        settings: &RepositorySettingsUpdate,
    ) -> Result<(), Error>;
}

/// Creates an `Octocrab` client authenticated with a personal access or
/// installation token.
///
/// # Arguments
///
/// * `token` - The access token.
/// * `base_uri` - Optional API base URI, e.g. for GitHub Enterprise Server.
///
/// # Errors
/// Returns an `Error::AuthError` if the token is empty, the base URI is
/// invalid, or the client cannot be built.
///
/// # Example
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, Error};
///
/// fn main() -> Result<(), Error> {
///     let octocrab = create_token_client("ghp_example", None)?;
///     let client = GitHubClient::new(octocrab);
///     Ok(())
/// }
/// ```
#[instrument(skip(token))]
pub fn create_token_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, Error> {
    if token.trim().is_empty() {
        return Err(Error::AuthError("No access token was provided.".to_string()));
    }

    let mut builder = Octocrab::builder().personal_token(token.to_string());
    if let Some(uri) = base_uri {
        info!(base_uri = uri, "Using custom GitHub API base URI");
        builder = builder
            .base_uri(uri)
            .map_err(|e| Error::AuthError(format!("Invalid API base URI '{}': {}", uri, e)))?;
    }

    // Requests are sent once. Mutations are not idempotent.
    builder = builder.add_retry_config(RetryConfig::None);

    builder.build().map_err(|e| {
        error!(error = ?e, "Failed to build Octocrab client");
        Error::AuthError("Failed to build the GitHub client.".to_string())
    })
}

fn map_octocrab_error(message: &str, e: octocrab::Error) -> Error {
    let mapped = match &e {
        octocrab::Error::GitHub { source, .. } => {
            let rate_limited = source.message.to_ascii_lowercase().contains("rate limit");
            match source.status_code {
                StatusCode::NOT_FOUND => Error::NotFound,
                StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS if rate_limited => {
                    Error::RateLimitExceeded
                }
                _ => Error::ApiError(source.message.clone()),
            }
        }
        other => Error::ApiError(other.to_string()),
    };

    log_octocrab_error(message, e);
    mapped
}

fn log_octocrab_error(message: &str, e: octocrab::Error) {
    match e {
        octocrab::Error::GitHub { source, backtrace } => {
            let err = source;
            error!(
                error_message = err.message,
                status = err.status_code.as_u16(),
                backtrace = backtrace.to_string(),
                "{}. Received an error from GitHub",
                message
            )
        }
        octocrab::Error::UriParse { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to parse URI.",
            message
        ),
        octocrab::Error::Serde { source, backtrace } => error!(
            error_message = source.to_string(),
            backtrace = backtrace.to_string(),
            "{}. Failed to deserialize the response.",
            message
        ),
        _ => error!(error_message = e.to_string(), message),
    };
}
