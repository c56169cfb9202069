//! Workflow status for generated outreach messages.

use serde::{Deserialize, Serialize};

/// Workflow status of a generated message.
///
/// Every message is created as `Draft`. `Approved` and `Sent` exist in
/// the schema for downstream workflow tooling; no transition is
/// performed by this system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageStatus {
    Draft,
    Approved,
    Sent,
}

impl MessageStatus {
    /// The canonical database/text representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Draft => "Draft",
            MessageStatus::Approved => "Approved",
            MessageStatus::Sent => "Sent",
        }
    }
}

impl std::fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for MessageStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "Draft" => Ok(MessageStatus::Draft),
            "Approved" => Ok(MessageStatus::Approved),
            "Sent" => Ok(MessageStatus::Sent),
            other => Err(format!("Invalid message status '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_canonical_strings() {
        for status in [
            MessageStatus::Draft,
            MessageStatus::Approved,
            MessageStatus::Sent,
        ] {
            let parsed = MessageStatus::try_from(status.as_str().to_string()).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn unknown_status_rejected() {
        assert!(MessageStatus::try_from("Archived".to_string()).is_err());
        assert!(MessageStatus::try_from("draft".to_string()).is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&MessageStatus::Draft).unwrap();
        assert_eq!(json, "\"Draft\"");
    }
}
