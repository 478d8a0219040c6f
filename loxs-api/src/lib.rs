//! High-level control API for Loxone miniservers
//!
//! This crate knows the miniserver's HTTP control surface: the exact
//! endpoint paths and how a resolved action identifier plus a desired state
//! token become a state-change request. It uses the private `http-client`
//! crate for transport.

mod controller;
mod endpoint;

pub use controller::SpsController;
pub use endpoint::Endpoint;

// Transport types surface in this crate's signatures.
pub use http_client::{HttpError, MiniserverClient};
