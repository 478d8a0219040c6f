//! Outcome taxonomy for change operations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terminal outcome of a change operation
///
/// Every operation ends in exactly one of these codes; lower-layer failures
/// never escape as errors from the change surface. The serialized names are
/// stable tokens consumed by the hosting collaborator's response templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    /// The control name was not found in the structure definition
    NameNotFound,
    /// A parameter is missing, or the structure definition could not be
    /// obtained with the supplied configuration
    IncompleteRequest,
    /// Resolution succeeded and the state change was acknowledged
    Complete,
    /// Resolution succeeded but the state change was not acknowledged
    StateChangeError,
}

impl StatusCode {
    /// The stable token for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusCode::NameNotFound => "NameNotFound",
            StatusCode::IncompleteRequest => "IncompleteRequest",
            StatusCode::Complete => "Complete",
            StatusCode::StateChangeError => "StateChangeError",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
