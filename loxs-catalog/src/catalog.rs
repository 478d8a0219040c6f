//! The in-memory device catalog and its name resolution

use crate::{ActionId, Category, CategoryId, Control, DeviceType, MiniserverInfo, Room, RoomId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized in-memory view of a structure definition
///
/// Holds the full set of rooms and categories (and through them, controls)
/// from one successful parse. The catalog is replaced wholesale on reload;
/// it is never patched in place.
///
/// Lookup scan order is deliberately concrete and stable: categories in
/// ascending id order, controls within a category in ascending id order.
/// It does not depend on hash order or on the order entries appear in the
/// source document, so repeated loads of the same definition resolve names
/// identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceCatalog {
    info: MiniserverInfo,
    rooms: BTreeMap<RoomId, Room>,
    categories: BTreeMap<CategoryId, Category>,
}

impl DeviceCatalog {
    /// Assemble a catalog from fully built parts
    pub fn new(
        info: MiniserverInfo,
        rooms: BTreeMap<RoomId, Room>,
        categories: BTreeMap<CategoryId, Category>,
    ) -> Self {
        Self {
            info,
            rooms,
            categories,
        }
    }

    /// Miniserver metadata captured at load time
    pub fn info(&self) -> &MiniserverInfo {
        &self.info
    }

    /// All rooms, keyed by room id
    pub fn rooms(&self) -> &BTreeMap<RoomId, Room> {
        &self.rooms
    }

    /// All categories, keyed by category id
    pub fn categories(&self) -> &BTreeMap<CategoryId, Category> {
        &self.categories
    }

    /// True if nothing has been loaded into this catalog
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty() && self.categories.is_empty()
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn control_count(&self) -> usize {
        self.categories.values().map(|c| c.controls.len()).sum()
    }

    /// All controls in scan order
    pub fn controls(&self) -> impl Iterator<Item = &Control> {
        self.categories
            .values()
            .flat_map(|category| category.controls.values())
    }

    /// Resolve a display name to the action identifier addressing it
    ///
    /// Returns the action id of the first control (in scan order) whose
    /// display name contains `name` as a case-sensitive substring, or `None`
    /// if nothing matches or the catalog is empty.
    ///
    /// The substring/first-match behavior is deliberate: callers pass
    /// loosely transcribed voice input, and "Kitchen" is expected to hit
    /// "Kitchen Light". Display names are not unique, so with an ambiguous
    /// query the first control in scan order wins.
    pub fn resolve_action_id(&self, name: &str) -> Option<&ActionId> {
        for control in self.controls() {
            if control.name.contains(name) {
                tracing::debug!(
                    "Resolved '{}' to control {} (action {})",
                    name,
                    control.id,
                    control.action_id
                );
                return Some(&control.action_id);
            }
        }
        tracing::debug!("Name '{}' not found in structure definition", name);
        None
    }

    /// Look up a room by exact display name
    pub fn room_by_name(&self, name: &str) -> Option<&Room> {
        self.rooms.values().find(|room| room.name == name)
    }

    /// All controls located in the room with the given display name
    pub fn controls_in_room<'a>(&'a self, room_name: &str) -> impl Iterator<Item = &'a Control> {
        let room_id = self.room_by_name(room_name).map(|room| room.id.clone());
        self.controls()
            .filter(move |control| Some(&control.room) == room_id.as_ref())
    }

    /// All controls of the given device type
    pub fn controls_of_type(&self, device_type: DeviceType) -> impl Iterator<Item = &Control> {
        self.controls()
            .filter(move |control| control.device_type == device_type)
    }
}
