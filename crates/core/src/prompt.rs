//! Prompt template for the outreach message generator.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Character bound stated in the prompt itself.
pub const MAX_MESSAGE_CHARS: usize = 500;

/// Default output-token budget for a single completion.
pub const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 150;

/// Default chat-completion model.
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo";

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// Render the fixed outreach prompt for a lead.
///
/// Substitutes the lead's name, role, and company into a template asking
/// for a casual, friendly LinkedIn DM under [`MAX_MESSAGE_CHARS`]
/// characters.
pub fn outreach_prompt(name: &str, role: &str, company: &str) -> String {
    format!(
        "Write a friendly, concise LinkedIn DM to someone named {name}, \
         who is a {role} at {company}. Make it casual and under \
         {MAX_MESSAGE_CHARS} characters."
    )
}
