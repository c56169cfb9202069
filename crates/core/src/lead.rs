//! Lead field validation and the transient edit form.
//!
//! A lead is persistable only when name, role, and company are all
//! non-empty. The LinkedIn URL is always optional and never affects
//! validity.

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Required lead fields, in the order they are reported on error.
pub const REQUIRED_LEAD_FIELDS: &[&str] = &["name", "role", "company"];

/// Validate a single required lead field.
///
/// Whitespace-only values count as empty.
pub fn validate_required_field(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("Field '{field}' must not be empty"))
    } else {
        Ok(())
    }
}

/// Validate the three required lead fields together.
///
/// Returns the first violation found, in field order.
pub fn validate_lead_fields(name: &str, role: &str, company: &str) -> Result<(), String> {
    validate_required_field("name", name)?;
    validate_required_field("role", role)?;
    validate_required_field("company", company)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Edit form
// ---------------------------------------------------------------------------

/// Transient, process-local contents of the lead edit form.
///
/// Populated from a selected lead or typed in by the user; never
/// persisted as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub role: String,
    pub company: String,
    pub linkedin_url: String,
}

impl LeadForm {
    /// True iff name, role, and company are all non-empty.
    ///
    /// Independent of `linkedin_url`.
    pub fn is_valid(&self) -> bool {
        validate_lead_fields(&self.name, &self.role, &self.company).is_ok()
    }

    /// Clear every field back to the empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The LinkedIn URL as an optional value: `None` when left blank.
    pub fn linkedin_url_opt(&self) -> Option<String> {
        let trimmed = self.linkedin_url.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
