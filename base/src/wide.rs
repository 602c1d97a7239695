//! UTF-16 renderings of variant text.

use std::fmt;

/// A wide-character string: UTF-16 code units, as used by wide console APIs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WideString {
    units: Vec<u16>,
}

impl WideString {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcodes and appends `text`.
    pub fn push_str(&mut self, text: &str) {
        self.units.extend(text.encode_utf16());
    }

    pub fn as_units(&self) -> &[u16] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Decodes back to UTF-8, replacing unpaired surrogates.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf16_lossy(&self.units)
    }

    /// Little-endian byte serialization of the code units.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.units.iter().flat_map(|unit| unit.to_le_bytes()).collect()
    }
}

impl From<&str> for WideString {
    fn from(text: &str) -> Self {
        let mut wide = WideString::new();
        wide.push_str(text);
        wide
    }
}

impl From<Vec<u16>> for WideString {
    fn from(units: Vec<u16>) -> Self {
        WideString { units }
    }
}

impl fmt::Display for WideString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_string_lossy())
    }
}
