pub mod generated_message;
pub mod lead;
