//! Outcome of applying the policy to one repository.

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

/// Why a repository was left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The repository is archived and read-only.
    Archived,
    /// The repository is a fork.
    Fork,
}

/// Outcome of one policy phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhaseOutcome {
    /// The phase was not attempted.
    NotRun,
    /// Every call of the phase succeeded.
    Completed,
    /// The phase stopped at the first failed call. Calls made before the
    /// failure may have taken effect.
    Failed(String),
}

/// Result of applying the policy to a repository.
///
/// Contains the outcome of both phases and counters for the branch
/// protection rules that were touched or left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyReport {
    /// Set when the repository was skipped without any API call
    pub skipped: Option<SkipReason>,

    /// Outcome of the branch protection phase
    pub branch_protection: PhaseOutcome,

    /// Outcome of the settings phase
    pub settings: PhaseOutcome,

    /// Number of branch protection rules created
    pub rules_created: usize,

    /// Number of branch protection rules updated
    pub rules_updated: usize,

    /// Number of rules left alone because they have no required status checks
    pub rules_skipped_empty: usize,

    /// Number of rules left alone because their pattern is not managed
    pub rules_skipped_pattern: usize,
}

impl PolicyReport {
    /// Creates a new report with no phase run yet.
    pub fn new() -> Self {
        Self {
            skipped: None,
            branch_protection: PhaseOutcome::NotRun,
            settings: PhaseOutcome::NotRun,
            rules_created: 0,
            rules_updated: 0,
            rules_skipped_empty: 0,
            rules_skipped_pattern: 0,
        }
    }

    /// Creates the report of a repository that was skipped.
    pub fn skipped(reason: SkipReason) -> Self {
        Self {
            skipped: Some(reason),
            ..Self::new()
        }
    }

    /// Returns true if the repository was processed rather than skipped,
    /// regardless of phase failures.
    pub fn is_processed(&self) -> bool {
        self.skipped.is_none()
    }

    /// Returns true if both phases completed without error.
    pub fn is_success(&self) -> bool {
        self.branch_protection == PhaseOutcome::Completed && self.settings == PhaseOutcome::Completed
    }

    /// Returns true if any branch protection rule was created or updated.
    pub fn has_rule_changes(&self) -> bool {
        self.rules_created > 0 || self.rules_updated > 0
    }
}

impl Default for PolicyReport {
    fn default() -> Self {
        Self::new()
    }
}
