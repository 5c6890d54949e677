//! Policy application command module.
//!
//! Resolves each `owner/repo` argument to a repository descriptor and runs the
//! [`RepositoryPolicyApplier`] on it. Repositories are processed one at a
//! time and independently: a repository that cannot be resolved is reported
//! and the run continues with the next one.

use std::path::PathBuf;

use clap::Args;
use github_client::{create_token_client, GitHubClient, RepositoryClient};
use repo_policy_core::RepositoryPolicyApplier;
use tracing::{error, info};

use crate::{config::AppConfig, errors::Error};

#[cfg(test)]
#[path = "apply_cmd_tests.rs"]
mod apply_cmd_tests;

/// Arguments of the `apply` command.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Repositories to process, in owner/repo form
    #[arg(required = true, value_parser = parse_repository_name)]
    pub repositories: Vec<RepositoryName>,

    /// GitHub access token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Path to the configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// GitHub API base URL, for GitHub Enterprise Server
    #[arg(long, env = "GITHUB_API_URL")]
    pub api_url: Option<String>,
}

/// A repository named on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName {
    pub owner: String,
    pub name: String,
}

impl std::fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Parses an `owner/repo` argument.
pub fn parse_repository_name(s: &str) -> Result<RepositoryName, String> {
    let (owner, name) = s
        .split_once('/')
        .ok_or_else(|| format!("invalid repository `{}`: expected owner/repo", s))?;

    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return Err(format!("invalid repository `{}`: expected owner/repo", s));
    }

    Ok(RepositoryName {
        owner: owner.to_string(),
        name: name.to_string(),
    })
}

/// Summary of an `apply` run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    /// Repositories on which both phases were attempted
    pub processed: Vec<String>,
    /// Processed repositories where at least one phase failed
    pub incomplete: Vec<String>,
    /// Archived or forked repositories left untouched
    pub skipped: Vec<String>,
    /// Repositories that could not be resolved
    pub unresolved: Vec<String>,
}

impl ApplySummary {
    /// Returns true if every named repository was resolved.
    pub fn is_success(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Applies the policy to each repository in order.
pub async fn apply_policies(
    client: &dyn RepositoryClient,
    applier: &RepositoryPolicyApplier,
    repositories: &[RepositoryName],
) -> ApplySummary {
    let mut summary = ApplySummary::default();

    for name in repositories {
        let full_name = name.to_string();

        let repository = match client.get_repository(&name.owner, &name.name).await {
            Ok(r) => r,
            Err(e) => {
                let e = Error::Repository {
                    repository: full_name.clone(),
                    source: e,
                };
                error!(repository = %full_name, error = %e, "Skipping repository");
                summary.unresolved.push(full_name);
                continue;
            }
        };

        let report = applier.apply_with_report(client, &repository).await;
        if !report.is_processed() {
            summary.skipped.push(full_name);
            continue;
        }

        info!(
            repository = %full_name,
            rules_changed = report.has_rule_changes(),
            success = report.is_success(),
            "Repository processed"
        );
        if !report.is_success() {
            summary.incomplete.push(full_name.clone());
        }
        summary.processed.push(full_name);
    }

    info!(
        processed = summary.processed.len(),
        incomplete = summary.incomplete.len(),
        skipped = summary.skipped.len(),
        unresolved = summary.unresolved.len(),
        "Policy application complete"
    );

    summary
}

/// Executes the `apply` command.
///
/// # Errors
///
/// Returns `Error::Config` if the configuration cannot be loaded and
/// `Error::Auth` if the GitHub client cannot be created. Failures on
/// individual repositories are reported in the returned summary.
pub async fn execute(args: &ApplyArgs) -> Result<ApplySummary, Error> {
    let config = AppConfig::resolve(args.config.as_deref())?;

    let octocrab = create_token_client(&args.token, args.api_url.as_deref())
        .map_err(|e| Error::Auth(e.to_string()))?;
    let client = GitHubClient::new(octocrab);

    let applier = RepositoryPolicyApplier::new(config.policy);
    Ok(apply_policies(&client, &applier, &args.repositories).await)
}
