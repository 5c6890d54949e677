//! GraphQL documents and response envelope used by the client.
//!
//! GitHub answers GraphQL requests with HTTP 200 even when the operation
//! fails, so every response is decoded through [`GraphQlResponse`] and its
//! `errors` array checked before the data is used.

use serde::Deserialize;

use crate::{BranchProtectionRule, Error};

#[cfg(test)]
#[path = "graphql_tests.rs"]
mod tests;

/// Client mutation ID sent with `createBranchProtectionRule`.
pub const CREATE_PROTECTION_CLIENT_MUTATION_ID: &str = "repo-policy-create-protection";

/// Client mutation ID sent with `updateBranchProtectionRule`.
pub const UPDATE_PROTECTION_CLIENT_MUTATION_ID: &str = "repo-policy-update-protection";

/// Number of branch protection rules fetched per repository.
pub const BRANCH_PROTECTION_RULE_LIMIT: u32 = 5;

pub(crate) const LIST_BRANCH_PROTECTION_RULES_QUERY: &str = r#"query($owner: String!, $repo: String!, $first: Int!) {
  repository(owner: $owner, name: $repo) {
    branchProtectionRules(first: $first) {
      nodes {
        id
        pattern
        requiredStatusChecks {
          app {
            id
          }
          context
        }
      }
    }
  }
}"#;

pub(crate) const CREATE_BRANCH_PROTECTION_RULE_MUTATION: &str = r#"mutation($input: CreateBranchProtectionRuleInput!) {
  createBranchProtectionRule(input: $input) {
    clientMutationId
  }
}"#;

pub(crate) const UPDATE_BRANCH_PROTECTION_RULE_MUTATION: &str = r#"mutation($input: UpdateBranchProtectionRuleInput!) {
  updateBranchProtectionRule(input: $input) {
    clientMutationId
  }
}"#;

/// The standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// A single entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
pub(crate) struct GraphQlError {
    pub message: String,
}

impl<T> GraphQlResponse<T> {
    /// Returns the response data, or the reported errors.
    pub fn into_data(self) -> Result<T, Error> {
        match (self.data, self.errors) {
            (_, Some(errors)) if !errors.is_empty() => Err(Error::GraphQl(
                errors.into_iter().map(|e| e.message).collect(),
            )),
            (Some(data), _) => Ok(data),
            (None, _) => Err(Error::InvalidResponse),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchProtectionRulesData {
    pub repository: Option<RepositoryBranchProtectionRules>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RepositoryBranchProtectionRules {
    pub branch_protection_rules: BranchProtectionRuleConnection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchProtectionRuleConnection {
    #[serde(default)]
    pub nodes: Vec<BranchProtectionRule>,
}

impl BranchProtectionRulesData {
    /// Returns the listed rules. A `null` repository means it does not exist
    /// or is not visible to the caller.
    pub fn into_rules(self) -> Result<Vec<BranchProtectionRule>, Error> {
        self.repository
            .map(|r| r.branch_protection_rules.nodes)
            .ok_or(Error::NotFound)
    }
}
