use batt_core::{Renderer, Tristate};
use std::io::{self, Write};

/// Width of the label column, colon included.
const LABEL_WIDTH: usize = 30;
const UNAVAILABLE: &str = "?";

/// Plain `label:   value` lines, one field per line.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
    digits: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, digits: bool) -> Self {
        Self { out, digits }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, name: &str, value: &str) -> io::Result<()> {
        let label = format!("{name}:");
        writeln!(self.out, "{label:<width$}{value}", width = LABEL_WIDTH)
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn begin_batch(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn begin_record(&mut self, index: usize) -> io::Result<()> {
        self.line("battery", &index.to_string())
    }

    fn emit_string(&mut self, name: &str, value: Option<&str>) -> io::Result<()> {
        self.line(name, value.unwrap_or(UNAVAILABLE))
    }

    fn emit_numeric(&mut self, name: &str, value: Option<f64>) -> io::Result<()> {
        match value {
            Some(v) => self.line(name, &format!("{v:.2}")),
            None => self.line(name, UNAVAILABLE),
        }
    }

    fn emit_percentage(&mut self, name: &str, value: Option<f64>) -> io::Result<()> {
        match value {
            Some(v) => self.line(name, &format!("{v:.2}%")),
            None => self.line(name, UNAVAILABLE),
        }
    }

    fn emit_flag(&mut self, name: &str, value: Tristate) -> io::Result<()> {
        let text = match (value, self.digits) {
            (Tristate::True, true) => "1",
            (Tristate::False, true) => "0",
            (Tristate::True, false) => "yes",
            (Tristate::False, false) => "no",
            (Tristate::Unknown, _) => UNAVAILABLE,
        };
        self.line(name, text)
    }

    fn end_record(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn end_batch(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use batt_core::{emit_record, BatteryRecord, FieldSequence};

    fn render(record: &BatteryRecord, sequence: &str, digits: bool) -> String {
        let mut r = TextRenderer::new(Vec::new(), digits);
        r.begin_batch().unwrap();
        emit_record(&mut r, 0, record, &sequence.parse::<FieldSequence>().unwrap()).unwrap();
        r.end_batch().unwrap();
        String::from_utf8(r.into_inner()).unwrap()
    }

    #[test]
    fn columns_and_units() {
        let record = BatteryRecord {
            name: Some("BAT0".into()),
            charge: Some(76.0),
            voltage: Some(12.5),
            present: Tristate::True,
            ..Default::default()
        };
        let expected = "\
battery:                      0
name:                         BAT0
charge:                       76.00%
voltage:                      12.50
max_charge:                   ?
present:                      yes
driver:                       ?
";
        assert_eq!(render(&record, "ncvtpd", false), expected);
    }

    #[test]
    fn digit_flags() {
        let record = BatteryRecord {
            present: Tristate::True,
            online: Tristate::False,
            ..Default::default()
        };
        let out = render(&record, "pog", true);
        assert!(out.contains("present:                      1\n"));
        assert!(out.contains("online:                       0\n"));
        assert!(out.contains("charging_enabled:             ?\n"));
    }

    #[test]
    fn word_flags() {
        let record = BatteryRecord {
            online: Tristate::False,
            ..Default::default()
        };
        assert!(render(&record, "o", false).ends_with("online:                       no\n"));
    }

    #[test]
    fn empty_batch_prints_nothing() {
        let mut r = TextRenderer::new(Vec::new(), false);
        r.begin_batch().unwrap();
        r.end_batch().unwrap();
        assert!(r.into_inner().is_empty());
    }
}
