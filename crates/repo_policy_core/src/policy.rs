//! The desired repository policy.
//!
//! [`DesiredPolicy`] is the fixed target configuration every processed
//! repository is converged towards. Its `Default` value is the complete
//! policy; only the rule creation language gate and the required status
//! check can be overridden from configuration.

use github_client::{
    BranchProtectionRuleInput, RepositoryDescriptor, RepositorySettingsUpdate,
    RequiredStatusCheckInput, SecurityAndAnalysis, SecurityFeature,
};
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;

/// Pattern used when a rule has to be created.
pub const DEFAULT_BRANCH_PATTERN: &str = "main";

/// Patterns of existing rules that are brought in line with the policy.
pub const UPDATABLE_BRANCH_PATTERNS: [&str; 2] = ["main", "master"];

/// Node ID of the GitHub Actions app.
pub const GITHUB_ACTIONS_APP_ID: &str = "MDM6QXBwMTUzNjg=";

/// Status check context required on protected branches.
pub const DEFAULT_STATUS_CHECK_CONTEXT: &str = "test / test";

/// The policy applied to every repository.
///
/// # Examples
///
/// ```rust
/// use github_client::RepositoryDescriptor;
/// use repo_policy_core::DesiredPolicy;
///
/// let policy = DesiredPolicy::default();
/// let repo = RepositoryDescriptor::new("my-org", "web", "R_1").with_language(Some("JavaScript"));
///
/// assert!(policy.allows_rule_creation(&repo));
/// assert!(DesiredPolicy::is_updatable_pattern("master"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesiredPolicy {
    /// Lower-case languages for which a missing rule is created.
    pub creation_languages: Vec<String>,

    /// The single status check every protected branch requires.
    pub required_status_check: StatusCheckPolicy,
}

/// A required status check scoped to a GitHub App.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusCheckPolicy {
    /// Node ID of the app that must report the check
    pub app_id: String,
    /// Name of the check
    pub context: String,
}

impl Default for StatusCheckPolicy {
    fn default() -> Self {
        Self {
            app_id: GITHUB_ACTIONS_APP_ID.to_string(),
            context: DEFAULT_STATUS_CHECK_CONTEXT.to_string(),
        }
    }
}

impl Default for DesiredPolicy {
    fn default() -> Self {
        Self {
            creation_languages: vec!["javascript".to_string()],
            required_status_check: StatusCheckPolicy::default(),
        }
    }
}

impl DesiredPolicy {
    /// Returns whether a rule may be created for a repository without any.
    ///
    /// The repository language is compared in lower case. A repository
    /// without a detected language never qualifies.
    pub fn allows_rule_creation(&self, repository: &RepositoryDescriptor) -> bool {
        match repository.normalized_language() {
            Some(language) => self
                .creation_languages
                .iter()
                .any(|l| l.eq_ignore_ascii_case(&language)),
            None => false,
        }
    }

    /// Returns whether an existing rule with this pattern is managed.
    pub fn is_updatable_pattern(pattern: &str) -> bool {
        UPDATABLE_BRANCH_PATTERNS.contains(&pattern)
    }

    /// Builds the branch protection settings for a rule on `pattern`.
    pub fn branch_protection(&self, pattern: &str) -> BranchProtectionRuleInput {
        BranchProtectionRuleInput {
            pattern: pattern.to_string(),

            requires_approving_reviews: true,
            required_approving_review_count: 1,
            requires_code_owner_reviews: true,
            restricts_review_dismissals: false,

            requires_status_checks: true,
            requires_strict_status_checks: true,
            required_status_checks: vec![RequiredStatusCheckInput {
                app_id: self.required_status_check.app_id.clone(),
                context: self.required_status_check.context.clone(),
            }],

            requires_conversation_resolution: true,
            requires_linear_history: true,
            requires_commit_signatures: true,
            is_admin_enforced: false,
            restricts_pushes: false,
            allows_deletions: false,
            allows_force_pushes: false,
        }
    }

    /// Builds the settings payload for a repository.
    ///
    /// Secret scanning is only requested for private repositories; for
    /// public ones the whole `security_and_analysis` object is left out.
    pub fn repository_settings(&self, repository: &RepositoryDescriptor) -> RepositorySettingsUpdate {
        let security_and_analysis = SecurityAndAnalysis {
            secret_scanning: repository.is_private().then(SecurityFeature::enabled),
        };

        RepositorySettingsUpdate {
            name: Some(repository.name().to_string()),
            has_issues: Some(true),
            has_projects: Some(false),
            has_wiki: Some(false),
            allow_squash_merge: Some(true),
            allow_merge_commit: Some(false),
            allow_rebase_merge: Some(false),
            allow_auto_merge: Some(true),
            delete_branch_on_merge: Some(true),
            security_and_analysis: (!security_and_analysis.is_empty())
                .then_some(security_and_analysis),
        }
    }
}
