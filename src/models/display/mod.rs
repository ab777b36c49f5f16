//! Display model implementations for table output
//!
//! Display models flatten API payloads into the columns shown by the CLI.

mod org;
mod repo;

pub use org::OrgDisplay;
pub use repo::RepoDisplay;

/// Placeholder for absent values
const NONE: &str = "--";
