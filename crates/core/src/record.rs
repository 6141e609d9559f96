/// A yes/no attribute that the hardware may not report at all.
///
/// Kept distinct from `Option<bool>` so that "unknown" can never be mistaken
/// for `false` by a caller using `unwrap_or_default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tristate {
    True,
    False,
    #[default]
    Unknown,
}

impl Tristate {
    /// Map a raw kernel attribute: `1` is true, `0` is false, anything else
    /// (including absence) is unknown.
    #[must_use]
    pub fn from_raw(raw: Option<i64>) -> Self {
        match raw {
            Some(1) => Self::True,
            Some(0) => Self::False,
            _ => Self::Unknown,
        }
    }
}

/// Normalized view of one battery, ready for a renderer.
///
/// Every value is independently optional; `None` means the driver did not
/// expose enough data to produce it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BatteryRecord {
    /// Current charge (0.0 – 100.0, or above when the cap is disabled).
    pub charge: Option<f64>,
    /// Full charge relative to design capacity, in percent.
    pub max_charge: Option<f64>,
    /// Volts.
    pub voltage: Option<f64>,
    /// Amps.
    pub current: Option<f64>,
    /// Degrees Celsius.
    pub temperature: Option<f64>,
    /// Estimated hours until discharged, assuming constant drain.
    pub etd: Option<f64>,

    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub technology: Option<String>,
    pub driver: Option<String>,
    pub status: Option<String>,
    pub health: Option<String>,
    pub serial_number: Option<String>,
    pub charge_type: Option<String>,
    pub charge_rate: Option<String>,

    pub present: Tristate,
    pub online: Tristate,
    pub charging_enabled: Tristate,
}
