//! High-level controller for miniserver operations

use crate::Endpoint;
use http_client::{HttpError, MiniserverClient};
use loxs_catalog::ActionId;

/// Controller for the miniserver's `/dev/sps` control interface
///
/// Composes the transport client and knows how to build the exact request
/// paths the firmware expects. It performs no retries and no validation of
/// state tokens; an illegal token is the miniserver's to reject.
#[derive(Debug, Clone)]
pub struct SpsController {
    client: MiniserverClient,
}

impl SpsController {
    /// Create a controller around an existing transport client
    pub fn new(client: MiniserverClient) -> Self {
        Self { client }
    }

    /// Get access to the transport client for advanced operations
    pub fn client(&self) -> &MiniserverClient {
        &self.client
    }

    /// Build the request path changing a control to a new state
    ///
    /// The state token is free-form; "On", "Off", "Pulse", jalousie
    /// directions, and pulse durations are all understood by the firmware
    /// of the respective control.
    pub fn state_change_path(action_id: &ActionId, new_state: &str) -> String {
        format!("{}/{}/{}", Endpoint::SpsIo.path(), action_id, new_state)
    }

    /// Change the state of the control addressed by `action_id`
    ///
    /// Returns `true` only on a successful (2xx) acknowledgment. Connection
    /// and HTTP failures come back as `false` rather than errors: a single
    /// unreachable device is an expected operational condition and must not
    /// abort a session that may address other devices.
    pub fn change_state_by_action_id(&self, action_id: &ActionId, new_state: &str) -> bool {
        let path = Self::state_change_path(action_id, new_state);
        match self.client.send_action(&path) {
            Ok(()) => {
                tracing::debug!("Control {} changed state to {}", action_id, new_state);
                true
            }
            Err(e) => {
                tracing::warn!(
                    "State change to {} for control {} failed: {}",
                    new_state,
                    action_id,
                    e
                );
                false
            }
        }
    }

    /// Fetch the structure-definition document
    pub fn fetch_structure(&self) -> Result<serde_json::Value, HttpError> {
        self.client.fetch_json(Endpoint::StructureDef.path())
    }

    /// Query the miniserver firmware version
    ///
    /// The miniserver answers with an `LL` envelope; the version string is
    /// its `value` field.
    pub fn miniserver_version(&self) -> Result<String, HttpError> {
        let doc = self.client.fetch_json(Endpoint::Version.path())?;
        doc["LL"]["value"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                HttpError::Parse("version response is missing LL.value".to_string())
            })
    }
}
