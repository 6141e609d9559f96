//! Reading and normalizing battery data from the power-supply sysfs tree.
//!
//! For every battery under the configured root the two `uevent` files are
//! read into one [`RawFields`], turned into a [`BatteryRecord`] by
//! [`synthesize`], and handed to a [`Renderer`].

pub mod convert;
pub mod device;
pub mod fields;
pub mod synth;
pub mod uevent;

pub use device::{is_battery, Device, PowerSupplyRoot};
pub use fields::RawFields;
pub use synth::synthesize;
pub use uevent::{parse_line, Key, Source};

use batt_config::RunConfig;
use batt_core::{emit_record, BatteryRecord, Renderer, Result};

/// Read and synthesize a single device directory.
///
/// `None` when neither of its `uevent` files could be opened.
pub fn read_battery(device: &Device, cap_charge: bool) -> Option<BatteryRecord> {
    device.read().map(|raw| synthesize(&raw, cap_charge))
}

/// Report every battery under `config.root` through `renderer`.
///
/// The root is listed before anything is rendered, so an unreadable root
/// produces no output at all. Every battery takes an index, even one whose
/// `uevent` files can't be read and so renders nothing. Returns the number
/// of records emitted.
pub fn report(config: &RunConfig, renderer: &mut dyn Renderer) -> Result<usize> {
    let root = PowerSupplyRoot::open(&config.root)?;

    renderer.begin_batch()?;
    let mut emitted = 0;
    for (index, device) in root.batteries(config.name.as_deref()).enumerate() {
        let Some(record) = read_battery(device, config.cap_charge) else {
            continue;
        };
        tracing::debug!(device = %device.name, index, "rendering battery");
        emit_record(renderer, index, &record, &config.sequence)?;
        emitted += 1;
    }
    renderer.end_batch()?;

    Ok(emitted)
}
