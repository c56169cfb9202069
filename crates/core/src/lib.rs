//! Domain types and validation shared across the outreach workspace.

pub mod lead;
pub mod message;
pub mod prompt;
pub mod types;
