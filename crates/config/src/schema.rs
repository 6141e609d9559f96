use batt_core::{BattError, FieldSequence, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where the kernel exposes power-supply devices.
pub const DEFAULT_ROOT: &str = "/sys/class/power_supply";

/// Optional defaults read from `batteryinfo.toml`.
///
/// Every key may be omitted; command-line arguments take precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Field sequence used when none is given on the command line.
    pub sequence: Option<String>,
    /// Emit JSON instead of text.
    pub json: bool,
    /// Render flags as `1`/`0`.
    pub digits: bool,
    /// Do not cap derived charge at 100%.
    pub no_cap: bool,
    /// Alternate power-supply root.
    pub root: Option<PathBuf>,
}

/// Output format selected for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Settings taken from the command line, before merging with the file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Already-validated positional sequence.
    pub sequence: Option<FieldSequence>,
    pub all: bool,
    pub json: bool,
    pub digits: bool,
    pub name: Option<String>,
    pub no_cap: bool,
    pub root: Option<PathBuf>,
}

/// Immutable configuration for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub format: OutputFormat,
    /// Fields to emit per battery, in order.
    pub sequence: FieldSequence,
    /// Flags as digits rather than words.
    pub digits: bool,
    /// Only report the device with this directory name.
    pub name: Option<String>,
    /// Clamp derived charge to 100%.
    pub cap_charge: bool,
    /// Power-supply root directory.
    pub root: PathBuf,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            format:     OutputFormat::Text,
            sequence:   FieldSequence::default(),
            digits:     false,
            name:       None,
            cap_charge: true,
            root:       PathBuf::from(DEFAULT_ROOT),
        }
    }
}

impl RunConfig {
    /// Merge file defaults with command-line overrides.
    ///
    /// `--all` wins over any sequence; a positional sequence wins over the
    /// file's. Boolean switches can only be turned on.
    pub fn resolve(file: ConfigFile, cli: Overrides) -> Result<Self> {
        if cli.name.as_deref() == Some("") {
            return Err(BattError::EmptyName);
        }

        let sequence = if cli.all {
            FieldSequence::all()
        } else if let Some(sequence) = cli.sequence {
            sequence
        } else if let Some(raw) = file.sequence.as_deref() {
            raw.parse::<FieldSequence>()?
        } else {
            FieldSequence::default()
        };

        let format = if cli.json || file.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            format,
            sequence,
            digits:     cli.digits || file.digits,
            name:       cli.name,
            cap_charge: !(cli.no_cap || file.no_cap),
            root:       cli
                .root
                .or(file.root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT)),
        })
    }
}
