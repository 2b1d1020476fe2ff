use crate::{Category, ComponentDefinition, ComponentKind, TerminalOffset};

const T_2H: &[TerminalOffset] = &[TerminalOffset::new(-0.4, 0.0), TerminalOffset::new(0.4, 0.0)];
const T_2V: &[TerminalOffset] = &[TerminalOffset::new(0.0, -0.4), TerminalOffset::new(0.0, 0.4)];
const T_TOP: &[TerminalOffset] = &[TerminalOffset::new(0.0, -0.4)];
// Base/gate left, collector/drain top right, emitter/source bottom right.
const T_3: &[TerminalOffset] = &[
    TerminalOffset::new(-0.3, 0.0),
    TerminalOffset::new(0.3, -0.3),
    TerminalOffset::new(0.3, 0.3),
];
const T_GATE: &[TerminalOffset] = &[
    TerminalOffset::new(-0.4, -0.2),
    TerminalOffset::new(-0.4, 0.2),
    TerminalOffset::new(0.4, 0.0),
];
const T_QUAD: &[TerminalOffset] = &[
    TerminalOffset::new(-0.3, -0.3),
    TerminalOffset::new(0.3, -0.3),
    TerminalOffset::new(0.3, 0.3),
    TerminalOffset::new(-0.3, 0.3),
];
const T_WIPER: &[TerminalOffset] = &[
    TerminalOffset::new(-0.4, 0.0),
    TerminalOffset::new(0.0, 0.4),
    TerminalOffset::new(0.4, 0.0),
];

const T_TEMP: &[TerminalOffset] = &[TerminalOffset::new(0.0, 0.4), TerminalOffset::new(0.0, -0.4)];
const T_ULTRA: &[TerminalOffset] = &[TerminalOffset::new(-0.3, 0.4), TerminalOffset::new(0.3, 0.4)];

const L_POLAR: &[&str] = &["+", "-"];
const L_GATE: &[&str] = &["A", "B", "Q"];
const L_BJT: &[&str] = &["B", "C", "E"];
const L_FET: &[&str] = &["G", "D", "S"];

#[allow(clippy::too_many_arguments)]
const fn def(
    kind: ComponentKind,
    label: &'static str,
    default_value: f64,
    unit: &'static str,
    category: Category,
    description: &'static str,
    color: &'static str,
    terminals: &'static [TerminalOffset],
    terminal_labels: Option<&'static [&'static str]>,
) -> ComponentDefinition {
    ComponentDefinition {
        kind,
        label,
        default_value,
        unit,
        category,
        description,
        color,
        terminals,
        terminal_labels,
    }
}

/// The component palette, indexed by `ComponentKind as usize`.
pub static CATALOG: [ComponentDefinition; 34] = {
    use Category::*;
    use ComponentKind as K;
    [
        // Power
        def(K::SourceDc, "DC Source", 12.0, "V", Power, "Adjustable Voltage", "#EF4444", T_2V, Some(L_POLAR)),
        def(K::Source5v, "5V Regulated", 5.0, "V", Power, "Logic Power", "#EF4444", T_TOP, Some(&["+5V"])),
        def(K::Source3v3, "3.3V Regulated", 3.3, "V", Power, "Low Voltage Logic", "#EF4444", T_TOP, Some(&["3V3"])),
        def(K::Battery1v5, "1.5V Battery", 1.5, "V", Power, "AA/AAA Cell", "#10B981", T_2V, Some(L_POLAR)),
        def(K::Battery9v, "9V Battery", 9.0, "V", Power, "Standard Block", "#10B981", T_2V, Some(L_POLAR)),
        def(K::Usb, "USB 5V", 5.0, "V", Power, "USB Power", "#3B82F6", T_TOP, Some(&["VCC"])),
        def(K::Ground, "Ground", 0.0, "V", Power, "0V Reference", "#6B7280", T_TOP, Some(&["GND"])),
        // Passive
        def(K::Resistor, "Resistor", 220.0, "Ω", Passive, "Current Limiter", "#F59E0B", T_2H, None),
        def(K::Potentiometer, "Potentiometer", 10000.0, "Ω", Passive, "Variable Resistor", "#F59E0B", T_WIPER, Some(&["1", "W", "3"])),
        def(K::CapacitorCeramic, "Capacitor", 0.1, "µF", Passive, "Fast filtering", "#FCD34D", T_2H, None),
        def(K::CapacitorElectrolytic, "El. Capacitor", 100.0, "µF", Passive, "Bulk Storage", "#8B5CF6", T_2V, Some(L_POLAR)),
        def(K::Inductor, "Inductor", 10.0, "mH", Passive, "Magnetic Storage", "#EC4899", T_2H, None),
        def(K::SwitchSpst, "Switch SPST", 0.0, "", Passive, "Toggle Switch", "#3B82F6", T_2H, None),
        def(K::SwitchPush, "Pushbutton", 0.0, "", Passive, "Momentary", "#3B82F6", T_2H, None),
        // Semiconductors
        def(K::Diode, "Diode", 0.0, "", Semi, "One-way Valve", "#9CA3AF", T_2H, Some(&["A", "K"])),
        def(K::DiodeZener, "Zener Diode", 5.1, "V", Semi, "Voltage Ref", "#F87171", T_2H, Some(&["K", "A"])),
        def(K::TransistorNpn, "NPN (BJT)", 0.0, "", Semi, "Switch/Amp", "#6366F1", T_3, Some(L_BJT)),
        def(K::TransistorPnp, "PNP (BJT)", 0.0, "", Semi, "Switch/Amp", "#818CF8", T_3, Some(L_BJT)),
        def(K::MosfetN, "N-MOSFET", 0.0, "", Semi, "Power Switch", "#6366F1", T_3, Some(L_FET)),
        def(K::MosfetP, "P-MOSFET", 0.0, "", Semi, "Power Switch", "#818CF8", T_3, Some(L_FET)),
        // ICs
        def(K::Ic555, "555 Timer", 0.0, "", Ics, "Pulse Gen", "#374151", T_QUAD, Some(&["1", "8", "4", "5"])),
        def(K::Opamp, "Op-Amp", 0.0, "", Ics, "Amplifier", "#374151", T_GATE, Some(&["In-", "In+", "Out"])),
        def(K::LogicAnd, "AND Gate", 0.0, "", Ics, "Logic", "#374151", T_GATE, Some(L_GATE)),
        def(K::LogicOr, "OR Gate", 0.0, "", Ics, "Logic", "#374151", T_GATE, Some(L_GATE)),
        def(K::LogicNot, "NOT Gate", 0.0, "", Ics, "Inverter", "#374151", T_2H, Some(&["In", "Out"])),
        def(K::Regulator7805, "7805 Reg", 5.0, "V", Ics, "Linear Reg", "#374151", T_WIPER, Some(&["In", "GND", "Out"])),
        // Sensors
        def(K::SensorLdr, "LDR", 0.0, "", Sensors, "Light Sensor", "#10B981", T_2H, None),
        def(K::SensorTemp, "Temp Sensor", 25.0, "°C", Sensors, "Analog Out", "#10B981", T_TEMP, Some(L_POLAR)),
        def(K::SensorUltra, "Ultrasonic", 0.0, "cm", Sensors, "Distance", "#3B82F6", T_ULTRA, Some(&["Trig", "Echo"])),
        // Output
        def(K::Led, "LED", 0.0, "", Output, "Indicator", "#EF4444", T_2H, Some(L_POLAR)),
        def(K::Buzzer, "Buzzer", 0.0, "", Output, "Sound", "#000000", T_2V, Some(L_POLAR)),
        def(K::MotorDc, "DC Motor", 0.0, "", Output, "Motion", "#F59E0B", T_2V, Some(L_POLAR)),
        def(K::MotorServo, "Servo", 0.0, "", Output, "Angle Control", "#3B82F6", T_3, Some(&["S", "+", "-"])),
        // Drivers
        def(K::DriverHbridge, "H-Bridge", 0.0, "", Drivers, "Motor Driver", "#1F2937", T_QUAD, None),
    ]
};
