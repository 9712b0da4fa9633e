//! Structured status payloads returned by controller configuration calls.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status value the controller reports for a completed operation.
pub const STATUS_SUCCESS: &str = "Success";

/// Status value used for rejected operations.
pub const STATUS_FAILED: &str = "Failed";

/// Open-ended status mapping returned by a controller operation.
///
/// The controller reports an overall outcome under the `Status` key when it
/// has one; every other field is carried through untouched in [`detail`].
/// Consumers match on [`status()`](StructuredStatus::status) instead of
/// probing the map for a key.
///
/// [`detail`]: StructuredStatus::detail
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredStatus {
    /// Overall outcome, when the controller reports one.
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Remaining response fields, passed through verbatim.
    #[serde(flatten)]
    pub detail: Map<String, Value>,
}

impl StructuredStatus {
    /// Successful outcome with a human-readable message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: Some(STATUS_SUCCESS.to_string()),
            detail: message_detail(message),
        }
    }

    /// Failed outcome with a human-readable message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: Some(STATUS_FAILED.to_string()),
            detail: message_detail(message),
        }
    }

    /// Attach an extra detail field.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.detail.insert(key.into(), value.into());
        self
    }

    /// The reported status, if any.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Whether the controller reported success. `None` when no status was
    /// reported at all.
    pub fn is_success(&self) -> Option<bool> {
        self.status.as_deref().map(|s| s == STATUS_SUCCESS)
    }
}

fn message_detail(message: impl Into<String>) -> Map<String, Value> {
    let mut detail = Map::new();
    detail.insert("Message".to_string(), Value::String(message.into()));
    detail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_key_is_capitalized_in_json() {
        let status = StructuredStatus::success("SNMP agent enabled");
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["Status"], "Success");
        assert_eq!(json["Message"], "SNMP agent enabled");
    }

    #[test]
    fn missing_status_field_deserializes_to_none() {
        let status: StructuredStatus =
            serde_json::from_str(r#"{"Message": "queued", "JobId": "JID_1234"}"#).unwrap();
        assert_eq!(status.status(), None);
        assert_eq!(status.is_success(), None);
        assert_eq!(status.detail["JobId"], "JID_1234");
    }

    #[test]
    fn detail_fields_survive_round_trip() {
        let status = StructuredStatus::failure("attribute rejected")
            .with_detail("MessageId", "IDRAC.2.8.SYS413");
        let json = serde_json::to_string(&status).unwrap();
        let back: StructuredStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, status);
        assert_eq!(back.is_success(), Some(false));
    }
}
