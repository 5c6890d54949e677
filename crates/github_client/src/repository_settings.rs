//! Repository settings update payload.
//!
//! Body of `PATCH /repos/{owner}/{repo}`. Only fields that are `Some` are
//! serialized, so a payload changes exactly the settings it names.
//!
//! See: https://docs.github.com/en/rest/repos/repos#update-a-repository

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "repository_settings_tests.rs"]
mod tests;

/// Represents the settings that can be updated for a repository.
/// Use `Default::default()` and modify fields as needed.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct RepositorySettingsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_issues: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_projects: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_wiki: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_squash_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_merge_commit: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_rebase_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_auto_merge: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_branch_on_merge: Option<bool>,

    /// Security feature toggles. Never sent as an empty object.
    #[serde(skip_serializing_if = "SecurityAndAnalysis::is_absent")]
    pub security_and_analysis: Option<SecurityAndAnalysis>,
}

/// The `security_and_analysis` object of the update payload.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct SecurityAndAnalysis {
    /// Secret scanning. GitHub rejects this for public repositories.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_scanning: Option<SecurityFeature>,
}

impl SecurityAndAnalysis {
    /// Returns whether no security feature is set.
    pub fn is_empty(&self) -> bool {
        self.secret_scanning.is_none()
    }

    fn is_absent(value: &Option<Self>) -> bool {
        value.as_ref().map_or(true, Self::is_empty)
    }
}

/// A single security feature setting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityFeature {
    pub status: SecurityFeatureStatus,
}

impl SecurityFeature {
    /// Returns a feature setting with status `enabled`.
    pub fn enabled() -> Self {
        Self {
            status: SecurityFeatureStatus::Enabled,
        }
    }
}

/// Status value of a security feature.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SecurityFeatureStatus {
    Enabled,
    Disabled,
}
