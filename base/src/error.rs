use crate::VariantString;
use crate::kind::Kind;
use std::fmt;
use std::panic::Location;

pub type VariantError = anyhow::Error;

pub use anyhow::Context;
pub use anyhow::bail;
pub use anyhow::ensure;
pub use anyhow::format_err;

/// A definite conversion asked a variant for a kind it cannot supply.
#[derive(Debug, Clone)]
pub struct ConversionError {
    value: VariantString,
    from: Kind,
    to: Kind,
    operation: &'static str,
    location: &'static Location<'static>,
    message: String,
}

impl ConversionError {
    pub fn new(
        value: impl Into<VariantString>,
        from: Kind,
        to: Kind,
        operation: &'static str,
        location: &'static Location<'static>,
    ) -> Self {
        let value = value.into();
        let message = format!(
            "Bad variant cast: value = [{value}]. Kind from {} (code {}) to {} (code {}). \
             Operation: {operation} ({}:{}:{}).",
            from,
            from.code(),
            to,
            to.code(),
            location.file(),
            location.line(),
            location.column(),
        );
        ConversionError {
            value,
            from,
            to,
            operation,
            location,
            message,
        }
    }

    /// Text form of the value at the time of the failure.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn from(&self) -> Kind {
        self.from
    }

    pub fn to(&self) -> Kind {
        self.to
    }

    /// The accessor that failed, e.g. `to_int64`.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Where the failing accessor was called from.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ConversionError {}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_message_is_cached() {
        let location = Location::caller();
        let error = ConversionError::new("abc", Kind::String, Kind::Double, "to_double", location);
        let expected = format!(
            "Bad variant cast: value = [abc]. Kind from string (code 3) to double (code 2). \
             Operation: to_double ({}:{}:{}).",
            location.file(),
            location.line(),
            location.column()
        );
        assert_eq!(error.message(), expected);
        assert_eq!(error.to_string(), expected);
        assert_ne!(error.message().as_ptr(), error.to_string().as_ptr());
    }

    #[test]
    fn test_accessors() {
        let error =
            ConversionError::new("x", Kind::String, Kind::Int, "to_int", Location::caller());
        assert_eq!(error.value(), "x");
        assert_eq!(error.from(), Kind::String);
        assert_eq!(error.to(), Kind::Int);
        assert_eq!(error.operation(), "to_int");
        assert!(error.location().file().ends_with("error.rs"));
    }

    #[test]
    fn test_into_anyhow_with_context() {
        let error =
            ConversionError::new("x", Kind::String, Kind::Bool, "to_bool", Location::caller());
        let wrapped = VariantError::from(error).context("read flag");
        expect!["read flag"].assert_eq(&wrapped.to_string());
        assert!(wrapped.downcast_ref::<ConversionError>().is_some());
    }
}
