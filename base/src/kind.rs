use std::fmt;

/// Which of the four payloads a [`Variant`](crate::Variant) holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    Double,
    String,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::Bool, Kind::Int, Kind::Double, Kind::String];

    /// Human readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::Int => "int64",
            Kind::Double => "double",
            Kind::String => "string",
        }
    }

    /// Stable numeric code, shown next to the name in diagnostics.
    pub fn code(self) -> u8 {
        match self {
            Kind::Bool => 0,
            Kind::Int => 1,
            Kind::Double => 2,
            Kind::String => 3,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Kind;

    #[test]
    fn codes_are_distinct_and_ordered() {
        let codes: Vec<u8> = Kind::ALL.iter().map(|kind| kind.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Kind::Int.to_string(), "int64");
        assert_eq!(format!("[{:>8}]", Kind::String), "[  string]");
    }
}
