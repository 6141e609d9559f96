use crate::convert::parse_int;
use crate::uevent::{parse_line, Key, Source};
use std::io::BufRead;
use tracing::{debug, trace};

/// Values collected from a device's `uevent` files, before any derivation.
///
/// Every slot is filled independently; `None` means the key was absent or
/// its value didn't parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    // ── Numeric ──────────────────────────────────────────────────────────────
    pub capacity: Option<i64>,
    pub charge_now: Option<i64>,
    pub charge_full: Option<i64>,
    pub charge_full_design: Option<i64>,
    pub voltage_now: Option<i64>,
    pub current_now: Option<i64>,
    pub temp: Option<i64>,
    pub present: Option<i64>,
    pub online: Option<i64>,
    pub charging_enabled: Option<i64>,

    // ── Strings ──────────────────────────────────────────────────────────────
    pub name: Option<String>,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub technology: Option<String>,
    pub status: Option<String>,
    pub health: Option<String>,
    pub serial_number: Option<String>,
    pub charge_type: Option<String>,
    pub charge_rate: Option<String>,
    pub driver: Option<String>,
}

impl RawFields {
    /// Store one recognized value. The latest occurrence of a key wins; an
    /// integer that fails to parse clears its slot.
    pub fn apply(&mut self, key: Key, value: &str) {
        match key {
            Key::Capacity         => self.capacity = parse_int(value),
            Key::ChargeNow        => self.charge_now = parse_int(value),
            Key::ChargeFull       => self.charge_full = parse_int(value),
            Key::ChargeFullDesign => self.charge_full_design = parse_int(value),
            Key::VoltageNow       => self.voltage_now = parse_int(value),
            Key::CurrentNow       => self.current_now = parse_int(value),
            Key::Temp             => self.temp = parse_int(value),
            Key::Present          => self.present = parse_int(value),
            Key::Online           => self.online = parse_int(value),
            Key::ChargingEnabled  => self.charging_enabled = parse_int(value),

            Key::Name         => self.name = Some(value.to_string()),
            Key::ModelName    => self.model = Some(value.to_string()),
            Key::Manufacturer => self.manufacturer = Some(value.to_string()),
            Key::Technology   => self.technology = Some(value.to_string()),
            Key::Status       => self.status = Some(value.to_string()),
            Key::Health       => self.health = Some(value.to_string()),
            Key::SerialNumber => self.serial_number = Some(value.to_string()),
            Key::ChargeType   => self.charge_type = Some(value.to_string()),
            Key::ChargeRate   => self.charge_rate = Some(value.to_string()),
            Key::Driver       => self.driver = Some(value.to_string()),
        }
    }

    /// Feed one raw line (trailing whitespace is stripped here).
    pub fn feed_line(&mut self, source: Source, line: &str) {
        let line = line.trim_end();
        match parse_line(source, line) {
            Some((key, value)) => self.apply(key, value),
            None if line.is_empty() => {}
            None => trace!(?source, line, "skipping unrecognised uevent line"),
        }
    }

    /// Consume every line of `reader`.
    ///
    /// A read error stops this source but keeps whatever was collected.
    pub fn ingest<R: BufRead>(&mut self, source: Source, mut reader: R) {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => self.feed_line(source, &String::from_utf8_lossy(&buf)),
                Err(e) => {
                    debug!(?source, "read error, keeping partial data: {e}");
                    break;
                }
            }
        }
    }
}
