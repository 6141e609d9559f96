use crate::error::{BattError, Result};
use std::str::FromStr;

/// Sequence printed when the user gives none.
pub const DEFAULT_SEQUENCE: &str = "ncvCmMedsp";

/// Every field, in the order used by `--all`.
pub const ALL_SEQUENCE: &str = "nctvCTdmMeshSHrpogD";

/// How a field's value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Numeric,
    Percentage,
    Flag,
}

/// One selectable piece of battery information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Charge,
    MaxCharge,
    Voltage,
    Current,
    Temperature,
    Etd,
    Driver,
    Model,
    Manufacturer,
    Technology,
    Status,
    Health,
    SerialNumber,
    ChargeType,
    ChargeRate,
    Present,
    Online,
    ChargingEnabled,
}

impl Field {
    /// Look up the field selected by a sequence character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        let field = match c {
            'n' => Self::Name,
            'c' => Self::Charge,
            't' => Self::MaxCharge,
            'v' => Self::Voltage,
            'C' => Self::Current,
            'T' => Self::Temperature,
            'D' => Self::Etd,
            'd' => Self::Driver,
            'm' => Self::Model,
            'M' => Self::Manufacturer,
            'e' => Self::Technology,
            's' => Self::Status,
            'h' => Self::Health,
            'S' => Self::SerialNumber,
            'H' => Self::ChargeType,
            'r' => Self::ChargeRate,
            'p' => Self::Present,
            'o' => Self::Online,
            'g' => Self::ChargingEnabled,
            _ => return None,
        };
        Some(field)
    }

    /// Key used for the field in both output formats.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name            => "name",
            Self::Charge          => "charge",
            Self::MaxCharge       => "max_charge",
            Self::Voltage         => "voltage",
            Self::Current         => "current",
            Self::Temperature     => "temperature",
            Self::Etd             => "etd",
            Self::Driver          => "driver",
            Self::Model           => "model",
            Self::Manufacturer    => "manufacturer",
            Self::Technology      => "technology",
            Self::Status          => "status",
            Self::Health          => "health",
            Self::SerialNumber    => "serial_number",
            Self::ChargeType      => "charge_type",
            Self::ChargeRate      => "charge_rate",
            Self::Present         => "present",
            Self::Online          => "online",
            Self::ChargingEnabled => "charging_enabled",
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        match self {
            Self::Charge | Self::MaxCharge => FieldKind::Percentage,
            Self::Voltage | Self::Current | Self::Temperature | Self::Etd => FieldKind::Numeric,
            Self::Present | Self::Online | Self::ChargingEnabled => FieldKind::Flag,
            _ => FieldKind::Text,
        }
    }
}

/// Ordered list of fields to emit for every battery.
///
/// Repeats are allowed; a field listed twice is emitted twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSequence(Vec<Field>);

impl FieldSequence {
    /// The sequence used by `--all`.
    #[must_use]
    pub fn all() -> Self {
        Self::from_known(ALL_SEQUENCE)
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.0
    }

    fn from_known(s: &str) -> Self {
        Self(s.chars().filter_map(Field::from_char).collect())
    }
}

impl Default for FieldSequence {
    fn default() -> Self {
        Self::from_known(DEFAULT_SEQUENCE)
    }
}

impl FromStr for FieldSequence {
    type Err = BattError;

    /// Parse a user-supplied sequence, rejecting the first unknown character.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .map(|c| Field::from_char(c).ok_or(BattError::InvalidField(c)))
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
}
