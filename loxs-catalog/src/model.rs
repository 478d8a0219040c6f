//! Catalog entity types

use crate::{ActionId, CategoryId, ControlId, DeviceType, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Top-level miniserver metadata from the structure definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniserverInfo {
    /// Language the miniserver reports its labels in (e.g. "ENG")
    pub language_code: String,
    /// Free-form location string configured on the miniserver
    pub location: String,
    /// Label the miniserver uses for the room concept (e.g. "Room")
    pub room_title: String,
}

/// A room as described by the structure definition
///
/// Immutable once loaded; a reload replaces all rooms wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub uuid: String,
}

/// A single controllable element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: ControlId,
    /// Display name; not guaranteed unique across the catalog
    pub name: String,
    /// The token the `/dev/sps/io` API addresses this control by
    pub action_id: ActionId,
    pub room: RoomId,
    pub device_type: DeviceType,
}

/// A named grouping of controls (e.g. "lights", "shading", "undefined")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub uuid: String,
    /// The category's own type string as reported by the miniserver
    pub kind: String,
    /// Controls filed under this category, keyed by control id
    pub controls: BTreeMap<ControlId, Control>,
}

impl Category {
    /// Create an empty category; controls are filed in during parsing
    pub fn new(
        id: CategoryId,
        name: impl Into<String>,
        uuid: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            uuid: uuid.into(),
            kind: kind.into(),
            controls: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_starts_empty() {
        let cat = Category::new(CategoryId::new("cat-1"), "lights", "uuid-cat-1", "lights");
        assert!(cat.controls.is_empty());
        assert_eq!(cat.kind, "lights");
    }
}
