//! Branch protection domain types.
//!
//! This module contains the GraphQL representation of GitHub branch protection
//! rules, both as read back from a repository and as sent to the
//! `createBranchProtectionRule` / `updateBranchProtectionRule` mutations.
//!
//! See: https://docs.github.com/en/graphql/reference/objects#branchprotectionrule

use serde::{Deserialize, Deserializer, Serialize};

#[cfg(test)]
#[path = "branch_protection_tests.rs"]
mod tests;

/// A branch protection rule as returned by the GraphQL API.
///
/// Only the fields needed to decide whether a rule should be updated are
/// queried.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BranchProtectionRule {
    /// GraphQL node ID of the rule
    pub id: String,
    /// Branch name pattern the rule applies to, e.g. `main` or `release/*`
    pub pattern: String,
    /// Status checks that must pass before merging. A `null` list is read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_status_checks: Vec<RequiredStatusCheck>,
}

impl BranchProtectionRule {
    /// Returns whether the rule has any required status checks configured.
    pub fn has_required_status_checks(&self) -> bool {
        !self.required_status_checks.is_empty()
    }
}

/// A required status check attached to an existing rule.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct RequiredStatusCheck {
    /// The app that must report the check. `None` means any source is accepted.
    pub app: Option<StatusCheckApp>,
    /// The name of the check, e.g. `test / test`
    pub context: String,
}

/// The GitHub App a required status check is scoped to.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct StatusCheckApp {
    /// GraphQL node ID of the app
    pub id: String,
}

/// A required status check as sent in a mutation input.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RequiredStatusCheckInput {
    /// GraphQL node ID of the app that must report the check
    pub app_id: String,
    /// The name of the check
    pub context: String,
}

/// The protection settings written by the create and update mutations.
///
/// Serializes to the camelCase field names of GitHub's
/// `CreateBranchProtectionRuleInput` and `UpdateBranchProtectionRuleInput`.
///
/// # Examples
///
/// ```rust
/// use github_client::{BranchProtectionRuleInput, RequiredStatusCheckInput};
///
/// let input = BranchProtectionRuleInput {
///     pattern: "main".to_string(),
///     requires_approving_reviews: true,
///     required_approving_review_count: 1,
///     requires_code_owner_reviews: true,
///     restricts_review_dismissals: false,
///     requires_status_checks: true,
///     requires_strict_status_checks: true,
///     required_status_checks: vec![RequiredStatusCheckInput {
///         app_id: "MDM6QXBwMTUzNjg=".to_string(),
///         context: "test / test".to_string(),
///     }],
///     requires_conversation_resolution: true,
///     requires_linear_history: true,
///     requires_commit_signatures: true,
///     is_admin_enforced: false,
///     restricts_pushes: false,
///     allows_deletions: false,
///     allows_force_pushes: false,
/// };
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BranchProtectionRuleInput {
    pub pattern: String,
    pub requires_approving_reviews: bool,
    pub required_approving_review_count: u32,
    pub requires_code_owner_reviews: bool,
    pub restricts_review_dismissals: bool,
    pub requires_status_checks: bool,
    pub requires_strict_status_checks: bool,
    pub required_status_checks: Vec<RequiredStatusCheckInput>,
    pub requires_conversation_resolution: bool,
    pub requires_linear_history: bool,
    pub requires_commit_signatures: bool,
    pub is_admin_enforced: bool,
    pub restricts_pushes: bool,
    pub allows_deletions: bool,
    pub allows_force_pushes: bool,
}

/// Input of the `createBranchProtectionRule` mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateBranchProtectionRuleInput<'a> {
    pub client_mutation_id: &'a str,
    pub repository_id: &'a str,
    #[serde(flatten)]
    pub rule: &'a BranchProtectionRuleInput,
}

/// Input of the `updateBranchProtectionRule` mutation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateBranchProtectionRuleInput<'a> {
    pub client_mutation_id: &'a str,
    pub branch_protection_rule_id: &'a str,
    #[serde(flatten)]
    pub rule: &'a BranchProtectionRuleInput,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
