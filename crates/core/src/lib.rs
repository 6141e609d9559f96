pub mod error;
pub mod field;
pub mod record;
pub mod render;

pub use error::{BattError, Result};
pub use field::{Field, FieldKind, FieldSequence};
pub use record::{BatteryRecord, Tristate};
pub use render::{emit_record, Renderer};
