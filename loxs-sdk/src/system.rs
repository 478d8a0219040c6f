//! LoxoneSystem - Main entry point for the SDK
//!
//! Provides a sync-first API for changing miniserver-managed device state
//! by name. The structure-definition catalog is loaded on first use and
//! reused for every later resolution in the session.

use crate::{ChangeOutcome, ChangeRequest, SdkError, StatusCode};
use http_client::MiniserverClient;
use loxs_api::SpsController;
use loxs_catalog::DeviceCatalog;
use loxs_parser::parse_structure;

/// Connection settings for a miniserver
#[derive(Debug, Clone, Default)]
pub struct LoxoneConfig {
    /// Miniserver host, optionally with a port (`"192.168.1.50"`)
    pub host: String,
    /// Basic-auth user
    pub user: String,
    /// Basic-auth password
    pub password: String,
    /// Pre-supplied structure definition
    ///
    /// When present it is parsed at construction and no fetch happens;
    /// useful for hosts that cache the document themselves.
    pub structure: Option<serde_json::Value>,
}

/// Main system entry point
///
/// LoxoneSystem is fully synchronous - each operation blocks the calling
/// thread until the miniserver answers. It exclusively owns one device
/// catalog for its lifetime; a reload replaces the catalog in a single
/// assignment and a failed load leaves the previous catalog untouched.
///
/// # Example
///
/// ```rust,no_run
/// use loxs_sdk::{LoxoneConfig, LoxoneSystem, StatusCode};
///
/// fn main() -> Result<(), loxs_sdk::SdkError> {
///     let mut system = LoxoneSystem::new(LoxoneConfig {
///         host: "192.168.1.50".to_string(),
///         user: "admin".to_string(),
///         password: "secret".to_string(),
///         structure: None,
///     })?;
///
///     match system.change_by_name("Kitchen Light", "On") {
///         StatusCode::Complete => println!("done"),
///         status => println!("not changed: {}", status),
///     }
///     Ok(())
/// }
/// ```
pub struct LoxoneSystem {
    controller: SpsController,
    /// `None` until the first successful load (or a pre-supplied parse)
    catalog: Option<DeviceCatalog>,
}

impl LoxoneSystem {
    /// Create a new system for the given miniserver
    ///
    /// Fails with [`SdkError::MissingConfig`] when a credential is absent,
    /// and with [`SdkError::Structure`] when a pre-supplied structure
    /// definition does not parse.
    pub fn new(config: LoxoneConfig) -> Result<Self, SdkError> {
        if config.host.is_empty() {
            return Err(SdkError::MissingConfig("host"));
        }
        if config.user.is_empty() {
            return Err(SdkError::MissingConfig("user"));
        }
        if config.password.is_empty() {
            return Err(SdkError::MissingConfig("password"));
        }

        let client = MiniserverClient::new(config.host, config.user, config.password)?;
        let catalog = match &config.structure {
            Some(doc) => Some(parse_structure(doc)?),
            None => None,
        };

        Ok(Self {
            controller: SpsController::new(client),
            catalog,
        })
    }

    /// The catalog loaded so far, if any
    pub fn catalog(&self) -> Option<&DeviceCatalog> {
        self.catalog.as_ref()
    }

    /// Access the underlying controller for direct operations
    pub fn controller(&self) -> &SpsController {
        &self.controller
    }

    /// Query the miniserver firmware version
    pub fn miniserver_version(&self) -> Result<String, SdkError> {
        Ok(self.controller.miniserver_version()?)
    }

    /// Load the structure definition if it has not been loaded yet
    ///
    /// Load-on-first-use: within one session the document is fetched at
    /// most once and reused for every later resolution. On failure the
    /// catalog stays in its previous state.
    pub fn ensure_catalog(&mut self) -> Result<(), SdkError> {
        if self.catalog.is_some() {
            return Ok(());
        }

        let doc = self.controller.fetch_structure()?;
        let catalog = parse_structure(&doc)?;
        tracing::debug!(
            "Loaded structure definition from {}: {} rooms, {} controls",
            self.controller.client().host(),
            catalog.room_count(),
            catalog.control_count()
        );
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Discard the cached catalog and load a fresh structure definition
    ///
    /// The swap only happens on success; a failed reload keeps the current
    /// catalog usable.
    pub fn reload_catalog(&mut self) -> Result<(), SdkError> {
        let doc = self.controller.fetch_structure()?;
        let catalog = parse_structure(&doc)?;
        self.catalog = Some(catalog);
        Ok(())
    }

    /// Change the state of the control matching `name`
    ///
    /// Every path terminates in a status code:
    /// - the catalog cannot be loaded -> [`StatusCode::IncompleteRequest`]
    ///   (the configuration cannot be obtained - a caller-configuration
    ///   problem, not a transient fault)
    /// - no control matches -> [`StatusCode::NameNotFound`]
    /// - the state change is acknowledged -> [`StatusCode::Complete`]
    /// - the state change fails -> [`StatusCode::StateChangeError`]
    pub fn change_by_name(&mut self, name: &str, new_state: &str) -> StatusCode {
        if let Err(e) = self.ensure_catalog() {
            tracing::warn!("Structure definition could not be loaded: {}", e);
            return StatusCode::IncompleteRequest;
        }

        let action_id = match self
            .catalog
            .as_ref()
            .and_then(|catalog| catalog.resolve_action_id(name))
        {
            Some(action_id) => action_id.clone(),
            None => return StatusCode::NameNotFound,
        };

        if self.controller.change_state_by_action_id(&action_id, new_state) {
            tracing::debug!("State of {} changed to {}", name, new_state);
            StatusCode::Complete
        } else {
            tracing::debug!("State of {} not changed", name);
            StatusCode::StateChangeError
        }
    }

    /// Run a full change request and report a structured outcome
    ///
    /// This is the surface the hosting collaborator calls: request fields
    /// are echoed back alongside the status code for response templating.
    pub fn handle(&mut self, request: ChangeRequest) -> ChangeOutcome {
        let status_code = self.dispatch(&request);

        ChangeOutcome {
            status_code,
            change_name: request.name,
            change_newstate: request.new_state,
            change_room: request.room,
        }
    }

    fn dispatch(&mut self, request: &ChangeRequest) -> StatusCode {
        if request.name.is_none() && request.room.is_none() && request.control_type.is_none() {
            tracing::warn!("Request names no control, room, or type to act on");
            return StatusCode::IncompleteRequest;
        }

        match (&request.name, &request.new_state) {
            (Some(name), Some(new_state)) => self.change_by_name(name, new_state),
            _ => {
                // Room/type filters alone do not identify a state change.
                tracing::warn!("Request needs both a control name and a new state");
                StatusCode::IncompleteRequest
            }
        }
    }
}
