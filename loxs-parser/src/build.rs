//! Catalog construction from a raw structure definition

use crate::error::{ParseResult, StructureError};
use crate::structure::{RawControl, StructureDoc};
use loxs_catalog::{
    ActionId, Category, CategoryId, Control, ControlId, DeviceCatalog, DeviceType, MiniserverInfo,
    Room, RoomId,
};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Parse a structure-definition document into a device catalog
///
/// Either the whole document parses and a complete catalog comes back, or
/// an error does; the caller's previous catalog is never touched.
pub fn parse_structure(doc: &serde_json::Value) -> ParseResult<DeviceCatalog> {
    let doc = StructureDoc::deserialize(doc)
        .map_err(|e| StructureError::InvalidDocument(e.to_string()))?;
    build_catalog(doc)
}

/// Parse a structure definition from raw JSON text
pub fn parse_structure_str(raw: &str) -> ParseResult<DeviceCatalog> {
    let doc: StructureDoc =
        serde_json::from_str(raw).map_err(|e| StructureError::InvalidDocument(e.to_string()))?;
    build_catalog(doc)
}

fn build_catalog(doc: StructureDoc) -> ParseResult<DeviceCatalog> {
    let info = MiniserverInfo {
        language_code: doc.ms_info.language_code,
        location: doc.ms_info.location,
        room_title: doc.ms_info.room_title,
    };

    let rooms: BTreeMap<RoomId, Room> = doc
        .rooms
        .into_iter()
        .map(|(id, raw)| {
            let id = RoomId::new(id);
            (
                id.clone(),
                Room {
                    id,
                    name: raw.name,
                    uuid: raw.uuid,
                },
            )
        })
        .collect();

    let mut categories: BTreeMap<CategoryId, Category> = doc
        .cats
        .into_iter()
        .map(|(id, raw)| {
            let id = CategoryId::new(id);
            (
                id.clone(),
                Category::new(id, raw.name, raw.uuid, raw.kind),
            )
        })
        .collect();

    for (control_id, raw) in &doc.controls {
        match raw.kind.as_str() {
            "Switch" => file_control(&mut categories, control_id, raw, DeviceType::Switch)?,
            "TimedSwitch" => {
                file_control(&mut categories, control_id, raw, DeviceType::TimedSwitch)?
            }
            "Jalousie" => file_control(&mut categories, control_id, raw, DeviceType::Jalousie)?,
            "LightController" => file_sub_switches(&mut categories, control_id, raw)?,
            other => {
                // Room controllers, info-only sensors and the like.
                tracing::trace!("Skipping control {} of unsupported type {}", control_id, other);
            }
        }
    }

    let catalog = DeviceCatalog::new(info, rooms, categories);
    tracing::debug!(
        "Built catalog: {} rooms, {} categories, {} controls",
        catalog.room_count(),
        catalog.category_count(),
        catalog.control_count()
    );
    Ok(catalog)
}

/// File a switch-shaped control under its own category
fn file_control(
    categories: &mut BTreeMap<CategoryId, Category>,
    control_id: &str,
    raw: &RawControl,
    device_type: DeviceType,
) -> ParseResult<()> {
    let name = require(raw.name.as_deref(), control_id, "name")?;
    let action = require(raw.uuid_action.as_deref(), control_id, "uuidAction")?;
    let room = require(raw.room.as_deref(), control_id, "room")?;
    let cat = require(raw.cat.as_deref(), control_id, "cat")?;

    let category = category_of(categories, control_id, cat)?;
    category.controls.insert(
        ControlId::new(control_id),
        Control {
            id: ControlId::new(control_id),
            name: name.to_string(),
            action_id: ActionId::new(action),
            room: RoomId::new(room),
            device_type,
        },
    );
    Ok(())
}

/// File the on/off sub-switches of a light controller
///
/// The controller itself is not a catalog entry. Each sub-control whose own
/// type is exactly `"Switch"` is filed under the controller's category and
/// room, keyed by the sub-control id and addressed by its own action
/// identifier. Other subtypes (dimmers, color controls) are skipped.
fn file_sub_switches(
    categories: &mut BTreeMap<CategoryId, Category>,
    control_id: &str,
    raw: &RawControl,
) -> ParseResult<()> {
    let room = require(raw.room.as_deref(), control_id, "room")?;
    let cat = require(raw.cat.as_deref(), control_id, "cat")?;

    for (sub_id, sub) in &raw.sub_controls {
        if sub.kind != "Switch" {
            tracing::trace!("Skipping sub-control {} of type {}", sub_id, sub.kind);
            continue;
        }

        let name = require(sub.name.as_deref(), sub_id, "name")?;
        let action = require(sub.uuid_action.as_deref(), sub_id, "uuidAction")?;

        let category = category_of(categories, control_id, cat)?;
        category.controls.insert(
            ControlId::new(sub_id),
            Control {
                id: ControlId::new(sub_id),
                name: name.to_string(),
                action_id: ActionId::new(action),
                room: RoomId::new(room),
                device_type: DeviceType::LightControllerSubswitch,
            },
        );
    }
    Ok(())
}

fn category_of<'a>(
    categories: &'a mut BTreeMap<CategoryId, Category>,
    control_id: &str,
    cat: &str,
) -> ParseResult<&'a mut Category> {
    categories
        .get_mut(&CategoryId::new(cat))
        .ok_or_else(|| StructureError::UnknownCategory {
            control: control_id.to_string(),
            category: cat.to_string(),
        })
}

fn require<'a>(field: Option<&'a str>, owner: &str, name: &str) -> ParseResult<&'a str> {
    field.ok_or_else(|| {
        StructureError::InvalidDocument(format!("control {} is missing '{}'", owner, name))
    })
}
