//! Application state controller for the outreach assistant.
//!
//! Keeps the client-visible state (lead list, selection, edit form,
//! message list) consistent with the backend after every action, and
//! gates mutating actions behind validity and busy checks. Generic over
//! [`store::LeadStore`] and [`store::MessageGenerator`] so the same
//! controller runs against PostgreSQL + the HTTP proxy in production
//! and against in-memory fakes in tests.

pub mod controller;
pub mod http;
pub mod pg;
pub mod store;

pub use controller::{ControllerError, LeadController};
pub use http::HttpMessageGenerator;
pub use pg::PgLeadStore;
pub use store::{GenerateError, LeadStore, MessageGenerator, StoreError};
