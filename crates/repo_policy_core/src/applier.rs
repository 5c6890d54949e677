//! Applies the [`DesiredPolicy`] to a single repository.
//!
//! This module provides the [`RepositoryPolicyApplier`] component. It runs
//! two independent phases, branch protection then settings, each attempted
//! once. A failing phase is logged and recorded in the [`PolicyReport`]; it
//! never aborts the other phase and never surfaces as an error.

use github_client::{RepositoryClient, RepositoryDescriptor};
use tracing::{error, info, instrument, warn};

use crate::{
    DesiredPolicy, PhaseOutcome, PolicyReport, PolicyResult, SkipReason, DEFAULT_BRANCH_PATTERN,
};

#[cfg(test)]
#[path = "applier_tests.rs"]
mod tests;

/// Converges a repository towards the desired policy.
///
/// # Examples
///
/// ```rust,no_run
/// use github_client::{create_token_client, GitHubClient, RepositoryClient};
/// use repo_policy_core::RepositoryPolicyApplier;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GitHubClient::new(create_token_client("ghp_example", None)?);
/// let repository = client.get_repository("my-org", "my-repo").await?;
///
/// let applier = RepositoryPolicyApplier::default();
/// let report = applier.apply_with_report(&client, &repository).await;
/// println!("Rules updated: {}", report.rules_updated);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RepositoryPolicyApplier {
    policy: DesiredPolicy,
}

impl RepositoryPolicyApplier {
    /// Creates an applier for the given policy.
    pub fn new(policy: DesiredPolicy) -> Self {
        Self { policy }
    }

    /// Returns the policy this applier converges repositories towards.
    pub fn policy(&self) -> &DesiredPolicy {
        &self.policy
    }

    /// Applies the policy to a repository.
    ///
    /// # Returns
    ///
    /// `false` if the repository was skipped because it is archived or a
    /// fork, `true` once both phases have been attempted, whether or not
    /// they succeeded.
    pub async fn apply<C>(&self, client: &C, repository: &RepositoryDescriptor) -> bool
    where
        C: RepositoryClient + ?Sized,
    {
        self.apply_with_report(client, repository)
            .await
            .is_processed()
    }

    /// Applies the policy to a repository and reports what happened.
    ///
    /// # Behavior
    ///
    /// 1. Archived and forked repositories are skipped without any API call.
    /// 2. Branch protection: lists the existing rules. Without rules, a rule
    ///    on `main` is created if the repository language qualifies. With
    ///    rules, each rule that has required status checks and a `main` or
    ///    `master` pattern is updated in place.
    /// 3. Settings: enables vulnerability alerts and automated security
    ///    fixes, then patches the repository settings.
    #[instrument(skip_all, fields(repository = %repository.full_name()))]
    pub async fn apply_with_report<C>(
        &self,
        client: &C,
        repository: &RepositoryDescriptor,
    ) -> PolicyReport
    where
        C: RepositoryClient + ?Sized,
    {
        if repository.is_archived() {
            info!("Repository is archived, skipping");
            return PolicyReport::skipped(SkipReason::Archived);
        }
        if repository.is_fork() {
            info!("Repository is a fork, skipping");
            return PolicyReport::skipped(SkipReason::Fork);
        }

        let mut report = PolicyReport::new();

        let branch_protection = match self
            .reconcile_branch_protection(client, repository, &mut report)
            .await
        {
            Ok(()) => PhaseOutcome::Completed,
            Err(e) => {
                error!(error = %e, "branch protection not applied");
                PhaseOutcome::Failed(e.to_string())
            }
        };
        report.branch_protection = branch_protection;

        report.settings = match self.reconcile_settings(client, repository).await {
            Ok(()) => {
                info!(updated = true, "settings applied");
                PhaseOutcome::Completed
            }
            Err(e) => {
                warn!(error = %e, "settings partially/not applied");
                PhaseOutcome::Failed(e.to_string())
            }
        };

        report
    }

    async fn reconcile_branch_protection<C>(
        &self,
        client: &C,
        repository: &RepositoryDescriptor,
        report: &mut PolicyReport,
    ) -> PolicyResult<()>
    where
        C: RepositoryClient + ?Sized,
    {
        let rules = client
            .list_branch_protection_rules(repository.owner(), repository.name())
            .await?;

        if rules.is_empty() && self.policy.allows_rule_creation(repository) {
            let input = self.policy.branch_protection(DEFAULT_BRANCH_PATTERN);
            client
                .create_branch_protection_rule(repository.node_id(), &input)
                .await?;

            info!(updated = true, "branch protection rule created");
            report.rules_created += 1;
            return Ok(());
        }

        for rule in &rules {
            let pattern = rule.pattern.as_str();

            if !rule.has_required_status_checks() {
                info!(updated = false, pattern, reason = "empty", "no rules to update");
                report.rules_skipped_empty += 1;
                continue;
            }

            if DesiredPolicy::is_updatable_pattern(pattern) {
                let input = self.policy.branch_protection(pattern);
                client.update_branch_protection_rule(&rule.id, &input).await?;

                info!(updated = true, pattern, "updated branch protection rule");
                report.rules_updated += 1;
            } else {
                info!(updated = false, pattern, reason = "skipped", "skipping pattern({})", pattern);
                report.rules_skipped_pattern += 1;
            }
        }

        Ok(())
    }

    async fn reconcile_settings<C>(
        &self,
        client: &C,
        repository: &RepositoryDescriptor,
    ) -> PolicyResult<()>
    where
        C: RepositoryClient + ?Sized,
    {
        let owner = repository.owner();
        let repo = repository.name();

        client.enable_vulnerability_alerts(owner, repo).await?;
        client.enable_automated_security_fixes(owner, repo).await?;

        let settings = self.policy.repository_settings(repository);
        client
            .update_repository_settings(owner, repo, &settings)
            .await?;

        Ok(())
    }
}
