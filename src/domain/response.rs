use serde::{Deserialize, Serialize};

use crate::domain::value::{KnownStatusCode, StatusCode};

/// One per-recipient record decoded from a `bulksms` response.
///
/// Fields are kept as the gateway sent them; missing fields are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryResult {
    pub status: String,
    pub recipient: String,
    #[serde(rename = "messageId")]
    pub message_id: String,
}

impl DeliveryResult {
    /// Parsed status code, or `None` if the status field is not an integer.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status.trim().parse::<i32>().ok().map(StatusCode::new)
    }

    pub fn is_success(&self) -> bool {
        self.status_code().is_some_and(StatusCode::is_success)
    }

    /// Whether the gateway flagged the recipient as a DND (do-not-disturb) number.
    pub fn is_dnd(&self) -> bool {
        self.status_code().and_then(StatusCode::known) == Some(KnownStatusCode::DndNumber)
    }
}
