//! GitHub API data models
//!
//! Only the fields the client reads are typed; everything else in a payload
//! is kept in a flattened map so a model serializes back to the payload it
//! was decoded from.

mod org;
mod repo;

pub use org::Organization;
pub use repo::Repository;
