//! # loxs-parser
//!
//! Parsing of the Loxone structure definition (`/data/Loxapp3.json`) into
//! the normalized device catalog.
//!
//! The parse is all-or-nothing: validation happens up front against a typed
//! document model, and a catalog is only produced once every control has
//! been filed successfully. Callers replace their previous catalog with the
//! result; a failed parse leaves it untouched.

mod build;
mod error;
mod structure;

pub use build::{parse_structure, parse_structure_str};
pub use error::{ParseResult, StructureError};
pub use structure::{RawCategory, RawControl, RawMsInfo, RawRoom, RawSubControl, StructureDoc};
