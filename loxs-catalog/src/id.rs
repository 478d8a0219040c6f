//! Identifier newtypes for catalog entities
//!
//! The miniserver addresses rooms, categories, and controls by opaque UUID
//! strings. Keeping each kind behind its own newtype prevents a room id from
//! being filed where a category id belongs, and keeps the action identifier
//! (the token the control API requires) distinct from the control's own
//! catalog key.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier from its wire representation
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                $name::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                $name::new(s)
            }
        }
    };
}

id_type! {
    /// Unique identifier for a room in the structure definition
    RoomId
}

id_type! {
    /// Unique identifier for a category in the structure definition
    CategoryId
}

id_type! {
    /// Catalog key of a control element
    ///
    /// Distinct from [`ActionId`]: this is the key the structure definition
    /// files the control under, not the token used to address it.
    ControlId
}

id_type! {
    /// Action identifier a control is addressed by on the `/dev/sps/io` API
    ///
    /// Globally unique among all loaded controls.
    ActionId
}
