//! HTTP server for the outreach assistant.
//!
//! Exposes the generation proxy (`POST /api/generate`) that renders a
//! lead's fields into the outreach prompt and forwards it to the
//! chat-completions service.

pub mod completion;
pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
