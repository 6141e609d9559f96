use crate::convert::{percent, scaled};
use crate::fields::RawFields;
use batt_core::{BatteryRecord, Tristate};

const MICROVOLTS_PER_VOLT: f64 = 1_000_000.0;
/// Divisor for `CURRENT_NOW`. Kept at the value the tool has always used
/// rather than the 1e6 the microamp unit would suggest.
const CURRENT_DIVISOR: f64 = 100_000.0;
/// `TEMP` is reported in tenths of a degree.
const DECIDEGREES_PER_DEGREE: f64 = 10.0;
const ETD_SCALE: f64 = 10.0;

/// Derive a [`BatteryRecord`] from collected raw values.
///
/// `cap_charge` clamps a charge above 100% down to 100%. Only the ratio path
/// can exceed it; a reported capacity is used only when already in range.
#[must_use]
pub fn synthesize(raw: &RawFields, cap_charge: bool) -> BatteryRecord {
    BatteryRecord {
        // ── Derived numbers ──────────────────────────────────────────────────
        charge:      charge(raw, cap_charge),
        max_charge:  raw
            .charge_full
            .zip(raw.charge_full_design)
            .and_then(|(full, design)| percent(full, design)),
        voltage:     scaled(raw.voltage_now, MICROVOLTS_PER_VOLT),
        current:     scaled(raw.current_now, CURRENT_DIVISOR),
        temperature: scaled(raw.temp, DECIDEGREES_PER_DEGREE),
        etd:         etd(raw),

        // ── Strings, copied through ──────────────────────────────────────────
        name:          raw.name.clone(),
        model:         raw.model.clone(),
        manufacturer:  raw.manufacturer.clone(),
        technology:    raw.technology.clone(),
        driver:        raw.driver.clone(),
        status:        raw.status.clone(),
        health:        raw.health.clone(),
        serial_number: raw.serial_number.clone(),
        charge_type:   raw.charge_type.clone(),
        charge_rate:   raw.charge_rate.clone(),

        // ── Flags ────────────────────────────────────────────────────────────
        present:          Tristate::from_raw(raw.present),
        online:           Tristate::from_raw(raw.online),
        charging_enabled: Tristate::from_raw(raw.charging_enabled),
    }
}

fn charge(raw: &RawFields, cap_charge: bool) -> Option<f64> {
    let charge = match raw.capacity {
        Some(capacity) if (0..=100).contains(&capacity) => Some(capacity as f64),
        _ => raw
            .charge_now
            .zip(raw.charge_full)
            .and_then(|(now, full)| percent(now, full)),
    }?;

    if cap_charge && charge > 100.0 {
        Some(100.0)
    } else {
        Some(charge)
    }
}

/// Hours until empty at the present drain, or `None` with no drain.
fn etd(raw: &RawFields) -> Option<f64> {
    let (full, now, current) = (raw.charge_full?, raw.charge_now?, raw.current_now?);
    if current == 0 {
        return None;
    }
    Some((full as f64 - now as f64) / current as f64 * ETD_SCALE)
}
