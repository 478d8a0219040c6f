//! Caller-facing change request and outcome types

use crate::StatusCode;
use serde::{Deserialize, Serialize};

/// A request to change a control's state
///
/// Only the by-name path is actionable: a request carrying `name` and
/// `new_state` changes that control. Room and type filters are accepted and
/// echoed for the caller's response templating, but do not by themselves
/// identify a state change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeRequest {
    /// Display name (or name fragment) of the target control
    pub name: Option<String>,
    /// Room filter, echoed on the outcome
    pub room: Option<String>,
    /// Device-type filter, echoed on the outcome
    pub control_type: Option<String>,
    /// The state token to send (e.g. "On", "Off", a pulse duration)
    pub new_state: Option<String>,
}

/// The structured result handed back to the hosting collaborator
///
/// Echoes the request fields so response templates can speak about what was
/// (or was not) done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeOutcome {
    pub status_code: StatusCode,
    pub change_name: Option<String>,
    pub change_newstate: Option<String>,
    pub change_room: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_serializes_with_template_keys() {
        let outcome = ChangeOutcome {
            status_code: StatusCode::Complete,
            change_name: Some("Kitchen Light".to_string()),
            change_newstate: Some("On".to_string()),
            change_room: None,
        };

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status_code"], "Complete");
        assert_eq!(json["change_name"], "Kitchen Light");
        assert_eq!(json["change_newstate"], "On");
        assert!(json["change_room"].is_null());
    }
}
