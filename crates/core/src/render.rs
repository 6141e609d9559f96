use crate::{
    field::{Field, FieldKind, FieldSequence},
    record::{BatteryRecord, Tristate},
};
use std::io;

/// Output sink for battery records.
///
/// The report driver calls these in a fixed shape:
/// `begin_batch`, then for every record `begin_record`, one `emit_*` per
/// selected field and `end_record`, and finally `end_batch`. Implementations
/// decide the concrete format; callers never inspect it.
pub trait Renderer {
    fn begin_batch(&mut self) -> io::Result<()>;

    fn begin_record(&mut self, index: usize) -> io::Result<()>;

    fn emit_string(&mut self, name: &str, value: Option<&str>) -> io::Result<()>;

    fn emit_numeric(&mut self, name: &str, value: Option<f64>) -> io::Result<()>;

    /// Like [`Renderer::emit_numeric`], for values that are percentages.
    fn emit_percentage(&mut self, name: &str, value: Option<f64>) -> io::Result<()>;

    fn emit_flag(&mut self, name: &str, value: Tristate) -> io::Result<()>;

    fn end_record(&mut self) -> io::Result<()>;

    fn end_batch(&mut self) -> io::Result<()>;
}

/// Emit one record through `renderer`, field by field in `sequence` order.
pub fn emit_record(
    renderer: &mut dyn Renderer,
    index: usize,
    record: &BatteryRecord,
    sequence: &FieldSequence,
) -> io::Result<()> {
    renderer.begin_record(index)?;
    for &field in sequence.fields() {
        let name = field.key();
        match field.kind() {
            FieldKind::Text => renderer.emit_string(name, text_value(record, field))?,
            FieldKind::Numeric => renderer.emit_numeric(name, numeric_value(record, field))?,
            FieldKind::Percentage => {
                renderer.emit_percentage(name, numeric_value(record, field))?
            }
            FieldKind::Flag => renderer.emit_flag(name, flag_value(record, field))?,
        }
    }
    renderer.end_record()
}

fn text_value(record: &BatteryRecord, field: Field) -> Option<&str> {
    let value = match field {
        Field::Name => &record.name,
        Field::Driver => &record.driver,
        Field::Model => &record.model,
        Field::Manufacturer => &record.manufacturer,
        Field::Technology => &record.technology,
        Field::Status => &record.status,
        Field::Health => &record.health,
        Field::SerialNumber => &record.serial_number,
        Field::ChargeType => &record.charge_type,
        Field::ChargeRate => &record.charge_rate,
        _ => return None,
    };
    value.as_deref()
}

fn numeric_value(record: &BatteryRecord, field: Field) -> Option<f64> {
    match field {
        Field::Charge => record.charge,
        Field::MaxCharge => record.max_charge,
        Field::Voltage => record.voltage,
        Field::Current => record.current,
        Field::Temperature => record.temperature,
        Field::Etd => record.etd,
        _ => None,
    }
}

fn flag_value(record: &BatteryRecord, field: Field) -> Tristate {
    match field {
        Field::Present => record.present,
        Field::Online => record.online,
        Field::ChargingEnabled => record.charging_enabled,
        _ => Tristate::Unknown,
    }
}
