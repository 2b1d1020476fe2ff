//! Component catalog for the Circuit Lab editor.
//!
//! The catalog is a *read-only* table of every component that can be placed
//! on the lab grid. Each entry carries its terminal geometry (offsets in unit
//! cell space, `-0.5..=0.5` around the cell centre), the default scalar value
//! and unit shown in the inspector, and the colour used when rendering.
//!
//! Components are identified by the closed [`ComponentKind`] enum, so a typed
//! lookup can never miss. String names (as used in scene scripts and JSON)
//! round-trip through [`ComponentKind::as_str`] and [`std::str::FromStr`].

mod definitions;
mod filter;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use definitions::CATALOG;
pub use filter::CatalogQuery;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown component kind '{0}'")]
    UnknownKind(String),

    #[error("Unknown component category '{0}'")]
    UnknownCategory(String),
}

/// Palette grouping used by the component sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Power,
    Passive,
    Semi,
    #[serde(rename = "ICs")]
    Ics,
    Sensors,
    Output,
    Drivers,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Power,
        Category::Passive,
        Category::Semi,
        Category::Ics,
        Category::Sensors,
        Category::Output,
        Category::Drivers,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Power => "Power",
            Category::Passive => "Passive",
            Category::Semi => "Semi",
            Category::Ics => "ICs",
            Category::Sensors => "Sensors",
            Category::Output => "Output",
            Category::Drivers => "Drivers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

/// Every placeable component type.
///
/// Variant order matches the palette order of [`CATALOG`]; `kind as usize`
/// indexes the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComponentKind {
    // Power
    SourceDc,
    Source5v,
    Source3v3,
    Battery1v5,
    Battery9v,
    Usb,
    Ground,
    // Passive
    Resistor,
    Potentiometer,
    CapacitorCeramic,
    CapacitorElectrolytic,
    Inductor,
    SwitchSpst,
    SwitchPush,
    // Semiconductors
    Diode,
    DiodeZener,
    TransistorNpn,
    TransistorPnp,
    MosfetN,
    MosfetP,
    // ICs
    Ic555,
    Opamp,
    LogicAnd,
    LogicOr,
    LogicNot,
    Regulator7805,
    // Sensors
    SensorLdr,
    SensorTemp,
    SensorUltra,
    // Output
    Led,
    Buzzer,
    MotorDc,
    MotorServo,
    // Drivers
    DriverHbridge,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 34] = [
        ComponentKind::SourceDc,
        ComponentKind::Source5v,
        ComponentKind::Source3v3,
        ComponentKind::Battery1v5,
        ComponentKind::Battery9v,
        ComponentKind::Usb,
        ComponentKind::Ground,
        ComponentKind::Resistor,
        ComponentKind::Potentiometer,
        ComponentKind::CapacitorCeramic,
        ComponentKind::CapacitorElectrolytic,
        ComponentKind::Inductor,
        ComponentKind::SwitchSpst,
        ComponentKind::SwitchPush,
        ComponentKind::Diode,
        ComponentKind::DiodeZener,
        ComponentKind::TransistorNpn,
        ComponentKind::TransistorPnp,
        ComponentKind::MosfetN,
        ComponentKind::MosfetP,
        ComponentKind::Ic555,
        ComponentKind::Opamp,
        ComponentKind::LogicAnd,
        ComponentKind::LogicOr,
        ComponentKind::LogicNot,
        ComponentKind::Regulator7805,
        ComponentKind::SensorLdr,
        ComponentKind::SensorTemp,
        ComponentKind::SensorUltra,
        ComponentKind::Led,
        ComponentKind::Buzzer,
        ComponentKind::MotorDc,
        ComponentKind::MotorServo,
        ComponentKind::DriverHbridge,
    ];

    /// Stable snake_case identifier used in scripts and serialized output.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::SourceDc => "source_dc",
            ComponentKind::Source5v => "source_5v",
            ComponentKind::Source3v3 => "source_3v3",
            ComponentKind::Battery1v5 => "battery_1v5",
            ComponentKind::Battery9v => "battery_9v",
            ComponentKind::Usb => "usb",
            ComponentKind::Ground => "ground",
            ComponentKind::Resistor => "resistor",
            ComponentKind::Potentiometer => "potentiometer",
            ComponentKind::CapacitorCeramic => "capacitor_ceramic",
            ComponentKind::CapacitorElectrolytic => "capacitor_electrolytic",
            ComponentKind::Inductor => "inductor",
            ComponentKind::SwitchSpst => "switch_spst",
            ComponentKind::SwitchPush => "switch_push",
            ComponentKind::Diode => "diode",
            ComponentKind::DiodeZener => "diode_zener",
            ComponentKind::TransistorNpn => "transistor_npn",
            ComponentKind::TransistorPnp => "transistor_pnp",
            ComponentKind::MosfetN => "mosfet_n",
            ComponentKind::MosfetP => "mosfet_p",
            ComponentKind::Ic555 => "ic_555",
            ComponentKind::Opamp => "opamp",
            ComponentKind::LogicAnd => "logic_and",
            ComponentKind::LogicOr => "logic_or",
            ComponentKind::LogicNot => "logic_not",
            ComponentKind::Regulator7805 => "regulator_7805",
            ComponentKind::SensorLdr => "sensor_ldr",
            ComponentKind::SensorTemp => "sensor_temp",
            ComponentKind::SensorUltra => "sensor_ultra",
            ComponentKind::Led => "led",
            ComponentKind::Buzzer => "buzzer",
            ComponentKind::MotorDc => "motor_dc",
            ComponentKind::MotorServo => "motor_servo",
            ComponentKind::DriverHbridge => "driver_hbridge",
        }
    }

    /// Catalog entry for this kind.
    pub fn definition(self) -> &'static ComponentDefinition {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownKind(s.to_string()))
    }
}

impl TryFrom<String> for ComponentKind {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComponentKind> for String {
    fn from(kind: ComponentKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Terminal position relative to the cell centre, in cell units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TerminalOffset {
    pub x: f64,
    pub y: f64,
}

impl TerminalOffset {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Immutable description of a placeable component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentDefinition {
    pub kind: ComponentKind,
    pub label: &'static str,
    pub default_value: f64,
    pub unit: &'static str,
    pub category: Category,
    pub description: &'static str,
    /// Body colour as a `#RRGGBB` hex string.
    pub color: &'static str,
    pub terminals: &'static [TerminalOffset],
    pub terminal_labels: Option<&'static [&'static str]>,
}

impl ComponentDefinition {
    pub fn terminal_count(&self) -> usize {
        self.terminals.len()
    }

    /// Pin label for the terminal at `index`, when the part names its pins.
    pub fn terminal_label(&self, index: usize) -> Option<&'static str> {
        self.terminal_labels.and_then(|labels| labels.get(index).copied())
    }
}

/// Looks up the definition for `kind`.
pub fn lookup(kind: ComponentKind) -> &'static ComponentDefinition {
    kind.definition()
}

/// Every definition in palette order.
pub fn all() -> impl Iterator<Item = &'static ComponentDefinition> {
    CATALOG.iter()
}
