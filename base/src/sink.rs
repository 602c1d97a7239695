//! Byte sinks for rendered variants.

use crate::result::VariantResult;
use crate::variant::Variant;
use std::io::Write;

/// Receives variants and literal text and renders them to some output.
pub trait Sink {
    fn emit(&mut self, value: &Variant) -> VariantResult<()>;

    fn emit_str(&mut self, text: &str) -> VariantResult<()>;

    fn emit_line(&mut self, value: &Variant) -> VariantResult<()> {
        self.emit(value)?;
        self.emit_str("\n")
    }
}

/// Writes the UTF-8 rendering of each variant.
pub struct NarrowWriter<'write> {
    write: Box<dyn Write + 'write>,
}

impl<'write> NarrowWriter<'write> {
    pub fn new(write: impl Write + 'write) -> NarrowWriter<'write> {
        NarrowWriter {
            write: Box::new(write),
        }
    }
}

impl Sink for NarrowWriter<'_> {
    fn emit(&mut self, value: &Variant) -> VariantResult<()> {
        write!(self.write, "{value}")?;
        Ok(())
    }

    fn emit_str(&mut self, text: &str) -> VariantResult<()> {
        self.write.write_all(text.as_bytes())?;
        Ok(())
    }
}

/// Writes each variant as UTF-16 little-endian code units.
pub struct WideWriter<'write> {
    write: Box<dyn Write + 'write>,
}

impl<'write> WideWriter<'write> {
    pub fn new(write: impl Write + 'write) -> WideWriter<'write> {
        WideWriter {
            write: Box::new(write),
        }
    }
}

impl Sink for WideWriter<'_> {
    fn emit(&mut self, value: &Variant) -> VariantResult<()> {
        self.write.write_all(&value.to_wide_string().to_le_bytes())?;
        Ok(())
    }

    fn emit_str(&mut self, text: &str) -> VariantResult<()> {
        for unit in text.encode_utf16() {
            self.write.write_all(&unit.to_le_bytes())?;
        }
        Ok(())
    }
}
