//! Raw structure-definition document model
//!
//! These types mirror the wire shape of `/data/Loxapp3.json` one-to-one.
//! Deserializing into them is the validation boundary: a document missing
//! `msInfo`, `rooms`, `cats`, or `controls` (or any required field inside
//! them) fails here instead of faulting mid-walk. The miniserver ships many
//! more fields than these; everything unknown is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level structure definition as served by the miniserver
#[derive(Debug, Deserialize)]
pub struct StructureDoc {
    #[serde(rename = "msInfo")]
    pub ms_info: RawMsInfo,
    pub rooms: BTreeMap<String, RawRoom>,
    pub cats: BTreeMap<String, RawCategory>,
    pub controls: BTreeMap<String, RawControl>,
}

/// The `msInfo` metadata block
#[derive(Debug, Deserialize)]
pub struct RawMsInfo {
    #[serde(rename = "languageCode")]
    pub language_code: String,
    pub location: String,
    #[serde(rename = "roomTitle")]
    pub room_title: String,
}

/// A `rooms` entry
#[derive(Debug, Deserialize)]
pub struct RawRoom {
    pub name: String,
    pub uuid: String,
}

/// A `cats` entry
#[derive(Debug, Deserialize)]
pub struct RawCategory {
    pub name: String,
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A `controls` entry
///
/// Only `type` is universally present; the remaining fields are optional at
/// the wire level because out-of-scope control types (sensors, room
/// controllers) carry arbitrary shapes. In-scope controls that lack a
/// required field are rejected during catalog building.
#[derive(Debug, Deserialize)]
pub struct RawControl {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    pub cat: Option<String>,
    #[serde(rename = "uuidAction")]
    pub uuid_action: Option<String>,
    pub room: Option<String>,
    #[serde(rename = "subControls", default)]
    pub sub_controls: BTreeMap<String, RawSubControl>,
}

/// A `subControls` entry of a light controller
#[derive(Debug, Deserialize)]
pub struct RawSubControl {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: Option<String>,
    #[serde(rename = "uuidAction")]
    pub uuid_action: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_document() {
        let raw = r#"{
            "msInfo": {"languageCode": "ENG", "location": "Home", "roomTitle": "Room"},
            "rooms": {"r1": {"name": "Kitchen", "uuid": "uuid-r1"}},
            "cats": {"c1": {"name": "lights", "uuid": "uuid-c1", "type": "lights"}},
            "controls": {
                "k1": {
                    "type": "Switch",
                    "name": "Kitchen Light",
                    "cat": "c1",
                    "uuidAction": "a1",
                    "room": "r1"
                }
            }
        }"#;

        let doc: StructureDoc = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.ms_info.language_code, "ENG");
        assert_eq!(doc.rooms["r1"].name, "Kitchen");
        assert_eq!(doc.cats["c1"].kind, "lights");
        assert_eq!(doc.controls["k1"].kind, "Switch");
        assert_eq!(doc.controls["k1"].uuid_action.as_deref(), Some("a1"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let raw = r#"{
            "msInfo": {"languageCode": "ENG", "location": "Home", "roomTitle": "Room",
                       "serialNr": "504F1234", "msName": "Miniserver"},
            "rooms": {},
            "cats": {},
            "controls": {}
        }"#;

        let doc: StructureDoc = serde_json::from_str(raw).unwrap();
        assert!(doc.rooms.is_empty());
    }

    #[test]
    fn test_missing_top_level_key_fails() {
        let raw = r#"{
            "msInfo": {"languageCode": "ENG", "location": "Home", "roomTitle": "Room"},
            "rooms": {},
            "cats": {}
        }"#;

        assert!(serde_json::from_str::<StructureDoc>(raw).is_err());
    }

    #[test]
    fn test_sub_controls_default_to_empty() {
        let raw = r#"{"type": "Switch", "name": "x", "cat": "c", "uuidAction": "a", "room": "r"}"#;
        let control: RawControl = serde_json::from_str(raw).unwrap();
        assert!(control.sub_controls.is_empty());
    }
}
