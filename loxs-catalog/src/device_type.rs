//! Control element types supported by the catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of control elements the catalog carries
///
/// The miniserver knows many more control types (room controllers,
/// info-only sensors, dimmers); everything outside this set is out of scope
/// and skipped during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceType {
    /// A plain on/off switch
    Switch,
    /// A switch with a firmware-side pulse timer
    TimedSwitch,
    /// An on/off sub-switch of a light controller group
    ///
    /// Filed under the light controller's category and room, but addressed
    /// by its own action identifier.
    LightControllerSubswitch,
    /// A motorized blind/shutter/awning actuator
    Jalousie,
}

impl DeviceType {
    /// Canonical name of this device type
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Switch => "Switch",
            DeviceType::TimedSwitch => "TimedSwitch",
            DeviceType::LightControllerSubswitch => "LightControllerSubswitch",
            DeviceType::Jalousie => "Jalousie",
        }
    }

    /// Look up a device type by its canonical name
    ///
    /// Used for caller-supplied type filters. Returns `None` for names
    /// outside the supported set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Switch" => Some(DeviceType::Switch),
            "TimedSwitch" => Some(DeviceType::TimedSwitch),
            "LightControllerSubswitch" => Some(DeviceType::LightControllerSubswitch),
            "Jalousie" => Some(DeviceType::Jalousie),
            _ => None,
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
