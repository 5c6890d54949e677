//! # Repo Policy Core
//!
//! This crate converges a GitHub repository towards a fixed policy: a
//! protected default branch and a fixed set of repository settings.
//!
//! ## Overview
//!
//! [`RepositoryPolicyApplier`] processes one repository per call in two
//! independent phases:
//! 1. Branch protection: create a rule on `main` when none exists and the
//!    repository language qualifies, otherwise update managed rules in place
//! 2. Settings: enable vulnerability alerts and automated security fixes,
//!    then patch issues, projects, wiki, merge strategy and secret scanning
//!
//! Failures inside a phase are logged and recorded in the [`PolicyReport`],
//! never returned, so one repository cannot stop a run across many.
//!
//! The API surface comes from the [`github_client::RepositoryClient`] trait,
//! which lets callers inject any client implementation.

mod applier;
pub use applier::RepositoryPolicyApplier;

mod errors;
pub use errors::{Error, PolicyResult};

mod policy;
pub use policy::{
    DesiredPolicy, StatusCheckPolicy, DEFAULT_BRANCH_PATTERN, DEFAULT_STATUS_CHECK_CONTEXT,
    GITHUB_ACTIONS_APP_ID, UPDATABLE_BRANCH_PATTERNS,
};

mod report;
pub use report::{PhaseOutcome, PolicyReport, SkipReason};
