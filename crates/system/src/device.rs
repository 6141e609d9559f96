use crate::fields::RawFields;
use crate::uevent::Source;
use batt_core::{BattError, Result};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Content of a battery's `type` attribute.
const BATTERY_TYPE: &[u8] = b"Battery";

/// Listing of a power-supply root, taken once per run.
#[derive(Debug, Clone)]
pub struct PowerSupplyRoot {
    entries: Vec<Device>,
}

/// One candidate device directory under the root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    /// Directory name, e.g. `BAT0`.
    pub name: String,
    pub path: PathBuf,
}

impl PowerSupplyRoot {
    /// List the immediate, non-hidden entries of `path`, sorted by name.
    ///
    /// Failing to open the directory is the only fatal filesystem error.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dir = fs::read_dir(path).map_err(|source| BattError::RootUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let mut entries: Vec<Device> = dir
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("skipping unreadable entry in '{}': {e}", path.display());
                    None
                }
            })
            .filter_map(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                (!name.starts_with('.')).then(|| Device {
                    name,
                    path: entry.path(),
                })
            })
            .collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));

        Ok(Self { entries })
    }

    /// Entries whose `type` says `Battery`.
    ///
    /// With a `filter`, yields at most the one entry with that exact name.
    pub fn batteries<'a>(&'a self, filter: Option<&'a str>) -> impl Iterator<Item = &'a Device> + 'a {
        let limit = if filter.is_some() { 1 } else { usize::MAX };
        self.entries
            .iter()
            .filter(move |device| filter.map_or(true, |name| device.name == name))
            .filter(|device| is_battery(&device.path))
            .take(limit)
    }
}

impl Device {
    /// Read the primary and then the driver `uevent` into one accumulator.
    ///
    /// Returns `None` only when neither file could be opened.
    pub fn read(&self) -> Option<RawFields> {
        let mut raw = RawFields::default();
        let primary = read_source(&self.path.join("uevent"), Source::Primary, &mut raw);
        let driver = read_source(
            &self.path.join("device").join("uevent"),
            Source::Device,
            &mut raw,
        );

        if !primary && !driver {
            debug!(device = %self.name, "no readable uevent file; skipping");
            return None;
        }
        Some(raw)
    }
}

/// `true` when `<dir>/type` holds exactly `Battery` (the trailing newline
/// sysfs appends to every attribute is allowed, nothing else).
pub fn is_battery(dir: &Path) -> bool {
    match fs::read(dir.join("type")) {
        Ok(content) => {
            let word = content.strip_suffix(b"\n").unwrap_or(&content[..]);
            word == BATTERY_TYPE
        }
        Err(_) => false,
    }
}

fn read_source(path: &Path, source: Source, raw: &mut RawFields) -> bool {
    match File::open(path) {
        Ok(file) => {
            raw.ingest(source, BufReader::new(file));
            true
        }
        Err(e) => {
            debug!("cannot open '{}': {e}", path.display());
            false
        }
    }
}
