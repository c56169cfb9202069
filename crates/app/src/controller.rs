//! The lead/message state controller.
//!
//! Owns the in-memory view of the backend (lead list, selection, edit
//! form, message list) and orchestrates the store and generator in
//! response to user actions. Mutating operations are gated on a busy
//! flag and on form validity, and state is only reset when the backend
//! call actually succeeded.

use outreach_core::lead::LeadForm;
use outreach_core::types::DbId;
use outreach_db::models::generated_message::GeneratedMessage;
use outreach_db::models::lead::{CreateLead, Lead, UpdateLead};

use crate::store::{GenerateError, LeadStore, MessageGenerator, StoreError};

/// Errors surfaced to the caller of a controller operation.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    /// A mutating operation is already in flight.
    #[error("An operation is already in progress")]
    Busy,

    /// The edit form is missing a required field.
    #[error("Invalid form: {0}")]
    InvalidForm(String),

    /// The operation requires a selected lead and none is selected.
    #[error("No lead selected")]
    NoSelection,

    /// The operation requires no selection, but a lead is selected.
    #[error("A lead is selected; saving applies to the selection")]
    SelectionActive,

    /// A backend store failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A generation failure; no message was created.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

/// Client-side state controller.
///
/// All operations take `&mut self`: the controller is single-threaded
/// and event-driven, with no coordination between operations beyond the
/// busy gate. In-flight requests cannot be cancelled.
pub struct LeadController<S, G> {
    store: S,
    generator: G,
    leads: Vec<Lead>,
    selected: Option<Lead>,
    form: LeadForm,
    messages: Vec<GeneratedMessage>,
    loading: bool,
}

impl<S: LeadStore, G: MessageGenerator> LeadController<S, G> {
    pub fn new(store: S, generator: G) -> Self {
        Self {
            store,
            generator,
            leads: Vec::new(),
            selected: None,
            form: LeadForm::default(),
            messages: Vec::new(),
            loading: false,
        }
    }

    // -- Accessors -----------------------------------------------------------

    pub fn leads(&self) -> &[Lead] {
        &self.leads
    }

    pub fn messages(&self) -> &[GeneratedMessage] {
        &self.messages
    }

    pub fn selected(&self) -> Option<&Lead> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    /// Mutable access for the edit-form bindings.
    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    /// True while a mutating operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True iff name, role, and company are all non-empty.
    pub fn is_valid(&self) -> bool {
        self.form.is_valid()
    }

    // -- Read operations -----------------------------------------------------

    /// Replace the lead list from the store.
    ///
    /// A fetch failure leaves an empty list rather than stale data.
    pub async fn load_leads(&mut self) {
        self.leads = match self.store.list_leads().await {
            Ok(leads) => leads,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load leads");
                Vec::new()
            }
        };
    }

    /// Replace the message list with the given lead's messages.
    pub async fn load_messages(&mut self, lead_id: DbId) {
        self.messages = match self.store.list_messages(lead_id).await {
            Ok(messages) => messages,
            Err(err) => {
                tracing::warn!(error = %err, lead_id = %lead_id, "Failed to load messages");
                Vec::new()
            }
        };
    }

    // -- Selection -----------------------------------------------------------

    /// Toggle selection of a lead.
    ///
    /// Re-selecting the currently selected lead deselects it, clearing
    /// the form and message list. Selecting a different lead populates
    /// the form from it and loads its messages.
    pub async fn select_lead(&mut self, lead: &Lead) {
        if self.selected.as_ref().map(|s| s.id) == Some(lead.id) {
            self.selected = None;
            self.form.reset();
            self.messages.clear();
            return;
        }

        self.selected = Some(lead.clone());
        self.form = LeadForm {
            name: lead.name.clone(),
            role: lead.role.clone(),
            company: lead.company.clone(),
            linkedin_url: lead.linkedin_url.clone().unwrap_or_default(),
        };
        self.load_messages(lead.id).await;
    }

    // -- Mutating operations ---------------------------------------------------

    /// Create a new lead from the edit form.
    ///
    /// Requires a valid form and no selected lead (the form mirrors the
    /// selection while one exists; saving then means update, not
    /// insert). On success the form is cleared and the lead list
    /// reloaded; on failure the form is left intact so the user can
    /// retry.
    pub async fn insert_lead(&mut self) -> Result<Lead, ControllerError> {
        self.ensure_idle()?;
        if self.selected.is_some() {
            return Err(ControllerError::SelectionActive);
        }
        if let Err(msg) = outreach_core::lead::validate_lead_fields(
            &self.form.name,
            &self.form.role,
            &self.form.company,
        ) {
            return Err(ControllerError::InvalidForm(msg));
        }

        self.loading = true;
        let input = CreateLead {
            name: self.form.name.clone(),
            role: self.form.role.clone(),
            company: self.form.company.clone(),
            linkedin_url: self.form.linkedin_url_opt(),
        };
        let result = self.store.insert_lead(&input).await;

        let outcome = match result {
            Ok(lead) => {
                tracing::info!(lead_id = %lead.id, "Inserted new lead");
                self.form.reset();
                self.load_leads().await;
                Ok(lead)
            }
            Err(err) => Err(ControllerError::Store(err)),
        };

        self.loading = false;
        outcome
    }

    /// Overwrite the selected lead's fields from the edit form.
    ///
    /// Full overwrite of name/role/company/linkedin_url, last write
    /// wins. On success the lead list is reloaded and both selection
    /// and form are cleared; on failure everything stays as it was.
    pub async fn update_lead(&mut self) -> Result<Lead, ControllerError> {
        self.ensure_idle()?;
        let selected_id = self.selected.as_ref().ok_or(ControllerError::NoSelection)?.id;
        if let Err(msg) = outreach_core::lead::validate_lead_fields(
            &self.form.name,
            &self.form.role,
            &self.form.company,
        ) {
            return Err(ControllerError::InvalidForm(msg));
        }

        self.loading = true;
        let input = UpdateLead {
            name: self.form.name.clone(),
            role: self.form.role.clone(),
            company: self.form.company.clone(),
            linkedin_url: self.form.linkedin_url_opt(),
        };
        let result = self.store.update_lead(selected_id, &input).await;

        let outcome = match result {
            Ok(lead) => {
                tracing::info!(lead_id = %lead.id, "Updated lead");
                self.load_leads().await;
                self.selected = None;
                self.form.reset();
                self.messages.clear();
                Ok(lead)
            }
            Err(err) => Err(ControllerError::Store(err)),
        };

        self.loading = false;
        outcome
    }

    /// Generate an outreach draft for the selected lead.
    ///
    /// On success the returned text is persisted as a new `Draft`
    /// message and the message list reloaded; on failure no message is
    /// created and state is unchanged.
    pub async fn generate_message(&mut self) -> Result<GeneratedMessage, ControllerError> {
        self.ensure_idle()?;
        let lead = self
            .selected
            .as_ref()
            .ok_or(ControllerError::NoSelection)?
            .clone();

        self.loading = true;
        let result = self
            .generator
            .generate(&lead.name, &lead.role, &lead.company)
            .await;

        let outcome = match result {
            Ok(content) => match self.store.insert_message(lead.id, &content).await {
                Ok(message) => {
                    tracing::info!(lead_id = %lead.id, message_id = %message.id, "Generated message stored");
                    self.load_messages(lead.id).await;
                    Ok(message)
                }
                Err(err) => Err(ControllerError::Store(err)),
            },
            Err(err) => Err(ControllerError::Generate(err)),
        };

        self.loading = false;
        outcome
    }

    // -- Internals -------------------------------------------------------------

    fn ensure_idle(&self) -> Result<(), ControllerError> {
        if self.loading {
            Err(ControllerError::Busy)
        } else {
            Ok(())
        }
    }

    #[cfg(test)]
    fn force_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
