use batt_core::{Renderer, Tristate};
use std::io::{self, Write};

/// A single `{"batteries": [...]}` document, written as records arrive.
///
/// Numbers carry two decimals; anything unavailable is `null`.
#[derive(Debug)]
pub struct JsonRenderer<W: Write> {
    out: W,
    digits: bool,
    written: usize,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W, digits: bool) -> Self {
        Self {
            out,
            digits,
            written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn key(&mut self, name: &str) -> io::Result<()> {
        self.out.write_all(b",\n\t\t")?;
        serde_json::to_writer(&mut self.out, name)?;
        self.out.write_all(b": ")
    }

    fn number(&mut self, name: &str, value: Option<f64>) -> io::Result<()> {
        self.key(name)?;
        match value.filter(|v| v.is_finite()) {
            Some(v) => write!(self.out, "{v:.2}"),
            None => self.out.write_all(b"null"),
        }
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn begin_batch(&mut self) -> io::Result<()> {
        self.out.write_all(b"{\n\"batteries\": [")
    }

    fn begin_record(&mut self, index: usize) -> io::Result<()> {
        if self.written > 0 {
            self.out.write_all(b",")?;
        }
        write!(self.out, "\n\t{{\n\t\t\"battery\": {index}")
    }

    fn emit_string(&mut self, name: &str, value: Option<&str>) -> io::Result<()> {
        self.key(name)?;
        match value {
            Some(s) => serde_json::to_writer(&mut self.out, s).map_err(io::Error::from),
            None => self.out.write_all(b"null"),
        }
    }

    fn emit_numeric(&mut self, name: &str, value: Option<f64>) -> io::Result<()> {
        self.number(name, value)
    }

    fn emit_percentage(&mut self, name: &str, value: Option<f64>) -> io::Result<()> {
        // same as any number; the `%` sign only exists in text output
        self.number(name, value)
    }

    fn emit_flag(&mut self, name: &str, value: Tristate) -> io::Result<()> {
        self.key(name)?;
        let text: &[u8] = match (value, self.digits) {
            (Tristate::True, true) => b"1",
            (Tristate::False, true) => b"0",
            (Tristate::True, false) => b"true",
            (Tristate::False, false) => b"false",
            (Tristate::Unknown, _) => b"null",
        };
        self.out.write_all(text)
    }

    fn end_record(&mut self) -> io::Result<()> {
        self.written += 1;
        self.out.write_all(b"\n\t}")
    }

    fn end_batch(&mut self) -> io::Result<()> {
        if self.written > 0 {
            self.out.write_all(b"\n")?;
        }
        self.out.write_all(b"]\n}\n")?;
        self.out.flush()
    }
}
