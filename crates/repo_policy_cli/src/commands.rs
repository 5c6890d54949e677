//! Command modules for the repo-policy CLI.
//!
//! - `apply_cmd`: Applies the repository policy to named repositories
pub mod apply_cmd;
