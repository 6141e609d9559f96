//! Recognition of `KEY=value` lines from power-supply `uevent` files.

/// Which of a device's two `uevent` files a line came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// `<device>/uevent`, the `POWER_SUPPLY_*` attributes.
    Primary,
    /// `<device>/device/uevent`, information about the bound driver.
    Device,
}

/// A recognized uevent key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Capacity,
    ChargeNow,
    ChargeFullDesign,
    ChargeFull,
    VoltageNow,
    CurrentNow,
    Temp,
    Present,
    Online,
    ChargingEnabled,
    Name,
    ModelName,
    Manufacturer,
    Technology,
    Status,
    Health,
    SerialNumber,
    ChargeType,
    ChargeRate,
    Driver,
}

// Keys that extend another key (CHARGE_FULL_DESIGN / CHARGE_FULL) must come
// first.
const PRIMARY_KEYS: &[(&str, Key)] = &[
    // ── Numeric ─────────────────────────────────────────────────────────────
    ("POWER_SUPPLY_CAPACITY",           Key::Capacity),
    ("POWER_SUPPLY_CHARGE_NOW",         Key::ChargeNow),
    ("POWER_SUPPLY_CHARGE_FULL_DESIGN", Key::ChargeFullDesign),
    ("POWER_SUPPLY_CHARGE_FULL",        Key::ChargeFull),
    ("POWER_SUPPLY_VOLTAGE_NOW",        Key::VoltageNow),
    ("POWER_SUPPLY_CURRENT_NOW",        Key::CurrentNow),
    ("POWER_SUPPLY_TEMP",               Key::Temp),

    // ── Strings ─────────────────────────────────────────────────────────────
    ("POWER_SUPPLY_NAME",               Key::Name),
    ("POWER_SUPPLY_MODEL_NAME",         Key::ModelName),
    ("POWER_SUPPLY_MANUFACTURER",       Key::Manufacturer),
    ("POWER_SUPPLY_TECHNOLOGY",         Key::Technology),
    ("POWER_SUPPLY_STATUS",             Key::Status),
    ("POWER_SUPPLY_HEALTH",             Key::Health),
    ("POWER_SUPPLY_SERIAL_NUMBER",      Key::SerialNumber),
    ("POWER_SUPPLY_CHARGE_TYPE",        Key::ChargeType),
    ("POWER_SUPPLY_CHARGE_RATE",        Key::ChargeRate),

    // ── Flags ───────────────────────────────────────────────────────────────
    ("POWER_SUPPLY_PRESENT",            Key::Present),
    ("POWER_SUPPLY_ONLINE",             Key::Online),
    ("POWER_SUPPLY_CHARGING_ENABLED",   Key::ChargingEnabled),
];

const DEVICE_KEYS: &[(&str, Key)] = &[("DRIVER", Key::Driver)];

impl Source {
    fn keys(self) -> &'static [(&'static str, Key)] {
        match self {
            Self::Primary => PRIMARY_KEYS,
            Self::Device => DEVICE_KEYS,
        }
    }
}

/// Split a right-trimmed line into a recognized key and its raw value.
///
/// The key name has to be followed directly by `=`; everything after the
/// separator is the value, untouched. Returns `None` for blank lines and
/// for keys this tool doesn't use.
pub fn parse_line(source: Source, line: &str) -> Option<(Key, &str)> {
    source.keys().iter().find_map(|&(name, key)| {
        line.strip_prefix(name)?
            .strip_prefix('=')
            .map(|value| (key, value))
    })
}
