pub mod generated_message_repo;
pub mod lead_repo;

pub use generated_message_repo::GeneratedMessageRepo;
pub use lead_repo::LeadRepo;
