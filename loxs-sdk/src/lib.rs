//! # loxs-sdk
//!
//! Sync-first SDK for changing the state of switches, light-controller
//! sub-switches, and jalousie actuators managed by a Loxone miniserver,
//! addressed by display name over the miniserver's HTTP control API.
//!
//! ```rust,no_run
//! use loxs_sdk::{ChangeRequest, LoxoneConfig, LoxoneSystem};
//!
//! fn main() -> Result<(), loxs_sdk::SdkError> {
//!     let mut system = LoxoneSystem::new(LoxoneConfig {
//!         host: "192.168.1.50".to_string(),
//!         user: "admin".to_string(),
//!         password: "secret".to_string(),
//!         structure: None,
//!     })?;
//!
//!     let outcome = system.handle(ChangeRequest {
//!         name: Some("Kitchen Light".to_string()),
//!         new_state: Some("On".to_string()),
//!         ..ChangeRequest::default()
//!     });
//!
//!     println!("{}", outcome.status_code);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! loxs-sdk (orchestration, status taxonomy)
//!     |
//! loxs-api (endpoint table, state-change requests)
//!     |
//! http-client (authenticated blocking transport)
//!
//! loxs-parser (structure definition -> catalog)
//!     |
//! loxs-catalog (rooms/categories/controls, name resolution)
//! ```
//!
//! The structure definition is fetched at most once per session
//! (load-on-first-use) and the resulting catalog is reused for every later
//! resolution. A failed reload never disturbs a previously loaded catalog.

// Main exports
pub use error::SdkError;
pub use request::{ChangeOutcome, ChangeRequest};
pub use status::StatusCode;
pub use system::{LoxoneConfig, LoxoneSystem};

// Re-export commonly used types from the lower crates
pub use http_client::{HttpError, MiniserverClient};
pub use loxs_api::{Endpoint, SpsController};
pub use loxs_catalog::{ActionId, DeviceCatalog, DeviceType};
pub use loxs_parser::{parse_structure, parse_structure_str, StructureError};

// Internal modules
mod error;
mod request;
mod status;
mod system;
