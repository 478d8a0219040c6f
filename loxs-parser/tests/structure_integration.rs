//! Integration tests for structure-definition parsing
//!
//! These tests run a realistic miniserver document through the full parse
//! and check the resulting catalog shape.

use loxs_catalog::{DeviceType, RoomId};
use loxs_parser::{parse_structure, parse_structure_str, StructureError};
use rstest::rstest;

/// A structure definition covering every classification path: plain
/// switches, a timed switch, a jalousie, a light controller with mixed
/// sub-control types, and out-of-scope controls.
fn sample_document() -> serde_json::Value {
    serde_json::json!({
        "msInfo": {
            "languageCode": "ENG",
            "location": "Home",
            "roomTitle": "Room",
            "serialNr": "504F94A12345"
        },
        "rooms": {
            "room-kitchen": {"name": "Kitchen", "uuid": "uuid-room-kitchen"},
            "room-living": {"name": "Living Room", "uuid": "uuid-room-living"},
            "room-bedroom": {"name": "Bedroom", "uuid": "uuid-room-bedroom"}
        },
        "cats": {
            "cat-lights": {"name": "Lights", "uuid": "uuid-cat-lights", "type": "lights"},
            "cat-shading": {"name": "Shading", "uuid": "uuid-cat-shading", "type": "shading"},
            "cat-undef": {"name": "Undefined", "uuid": "uuid-cat-undef", "type": "undefined"}
        },
        "controls": {
            "ctl-01": {
                "type": "Switch",
                "name": "Kitchen Light",
                "cat": "cat-lights",
                "uuidAction": "action-kitchen-light",
                "room": "room-kitchen"
            },
            "ctl-02": {
                "type": "TimedSwitch",
                "name": "Stair Light",
                "cat": "cat-lights",
                "uuidAction": "action-stair-light",
                "room": "room-living"
            },
            "ctl-03": {
                "type": "Jalousie",
                "name": "Bedroom Blinds",
                "cat": "cat-shading",
                "uuidAction": "action-bedroom-blinds",
                "room": "room-bedroom"
            },
            "ctl-04": {
                "type": "LightController",
                "name": "Living Room Lighting",
                "cat": "cat-lights",
                "uuidAction": "action-living-controller",
                "room": "room-living",
                "subControls": {
                    "sub-01": {
                        "type": "Switch",
                        "name": "Living Room Spots",
                        "uuidAction": "action-living-spots"
                    },
                    "sub-02": {
                        "type": "Dimmer",
                        "name": "Living Room Dimmer",
                        "uuidAction": "action-living-dimmer"
                    }
                }
            },
            "ctl-05": {
                "type": "InfoOnlyAnalog",
                "name": "Outside Temperature"
            },
            "ctl-06": {
                "type": "IRoomController",
                "name": "Bedroom Climate",
                "cat": "cat-undef",
                "room": "room-bedroom"
            }
        }
    })
}

#[test]
fn test_parse_preserves_counts() {
    let catalog = parse_structure(&sample_document()).unwrap();

    assert_eq!(catalog.room_count(), 3);
    assert_eq!(catalog.category_count(), 3);
    // 2 switches + 1 jalousie + 1 sub-switch; controller itself, the dimmer
    // sub-control, and the two out-of-scope controls are absent.
    assert_eq!(catalog.control_count(), 4);
}

#[test]
fn test_out_of_scope_types_are_absent() {
    let catalog = parse_structure(&sample_document()).unwrap();

    for control in catalog.controls() {
        assert_ne!(control.name, "Outside Temperature");
        assert_ne!(control.name, "Bedroom Climate");
        assert_ne!(control.name, "Living Room Lighting");
        assert_ne!(control.name, "Living Room Dimmer");
    }
}

#[test]
fn test_light_controller_sub_switch_filing() {
    let catalog = parse_structure(&sample_document()).unwrap();

    let spots = catalog
        .controls()
        .find(|c| c.name == "Living Room Spots")
        .expect("sub-switch should be filed");

    // Filed under the parent's category and room, with its own action id.
    assert_eq!(spots.device_type, DeviceType::LightControllerSubswitch);
    assert_eq!(spots.room, RoomId::new("room-living"));
    assert_eq!(spots.action_id.as_str(), "action-living-spots");

    let lights = &catalog.categories()[&loxs_catalog::CategoryId::new("cat-lights")];
    assert!(lights
        .controls
        .contains_key(&loxs_catalog::ControlId::new("sub-01")));
}

#[test]
fn test_action_ids_are_unique() {
    let catalog = parse_structure(&sample_document()).unwrap();

    let mut seen = std::collections::BTreeSet::new();
    for control in catalog.controls() {
        assert!(
            seen.insert(control.action_id.clone()),
            "duplicate action id {}",
            control.action_id
        );
    }
}

#[test]
fn test_miniserver_info_is_retained() {
    let catalog = parse_structure(&sample_document()).unwrap();

    assert_eq!(catalog.info().language_code, "ENG");
    assert_eq!(catalog.info().location, "Home");
    assert_eq!(catalog.info().room_title, "Room");
}

#[test]
fn test_serialized_catalog_preserves_counts() {
    let catalog = parse_structure(&sample_document()).unwrap();

    let serialized = serde_json::to_string(&catalog).unwrap();
    let restored: loxs_catalog::DeviceCatalog = serde_json::from_str(&serialized).unwrap();

    assert_eq!(restored.room_count(), catalog.room_count());
    assert_eq!(restored.category_count(), catalog.category_count());
    assert_eq!(restored.control_count(), catalog.control_count());
}

#[rstest]
#[case("msInfo")]
#[case("rooms")]
#[case("cats")]
#[case("controls")]
fn test_missing_top_level_key_is_invalid(#[case] key: &str) {
    let mut doc = sample_document();
    doc.as_object_mut().unwrap().remove(key);

    let err = parse_structure(&doc).unwrap_err();
    assert!(
        matches!(err, StructureError::InvalidDocument(_)),
        "removing {} should invalidate the document, got {:?}",
        key,
        err
    );
}

#[test]
fn test_non_object_document_is_invalid() {
    let err = parse_structure_str("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, StructureError::InvalidDocument(_)));
}

#[test]
fn test_resolution_against_parsed_catalog() {
    let catalog = parse_structure(&sample_document()).unwrap();

    assert_eq!(
        catalog.resolve_action_id("Bedroom Blinds").unwrap().as_str(),
        "action-bedroom-blinds"
    );
    // Sub-switches resolve like any other control.
    assert_eq!(
        catalog.resolve_action_id("Living Room Spots").unwrap().as_str(),
        "action-living-spots"
    );
    assert_eq!(catalog.resolve_action_id("Garage"), None);
}
