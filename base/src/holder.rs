use crate::VariantString;
use crate::format::{write_bool, write_double, write_double_precise};
use crate::kind::Kind;
use crate::parse::{parse_bool_token, parse_double, parse_int64};
use crate::wide::WideString;
use std::fmt;
use std::sync::Arc;

/// Kind-specific payload behind a [`Variant`](crate::Variant).
///
/// Conversions return `None` when the payload cannot be read as the target.
/// Only [`StringHolder`] ever does that.
pub(crate) trait Holder: fmt::Debug + Send + Sync {
    fn kind(&self) -> Kind;

    fn to_bool(&self) -> Option<bool>;
    fn to_int64(&self) -> Option<i64>;
    fn to_double(&self) -> Option<f64>;
    fn to_text(&self) -> VariantString;

    fn can_cast_to_bool(&self) -> bool {
        true
    }
    fn can_cast_to_int(&self) -> bool {
        true
    }
    fn can_cast_to_double(&self) -> bool {
        true
    }

    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Numeric precision only affects doubles.
    fn write_text_precise(&self, out: &mut dyn fmt::Write, _precision: usize) -> fmt::Result {
        self.write_text(out)
    }

    fn write_wide(&self, out: &mut WideString) {
        let mut narrow = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut narrow);
        out.push_str(&narrow);
    }
}

pub(crate) type SharedHolder = Arc<dyn Holder>;

#[derive(Debug)]
pub(crate) struct BoolHolder(pub(crate) bool);

impl Holder for BoolHolder {
    fn kind(&self) -> Kind {
        Kind::Bool
    }
    fn to_bool(&self) -> Option<bool> {
        Some(self.0)
    }
    fn to_int64(&self) -> Option<i64> {
        Some(i64::from(self.0))
    }
    fn to_double(&self) -> Option<f64> {
        Some(if self.0 { 1.0 } else { 0.0 })
    }
    fn to_text(&self) -> VariantString {
        VariantString::inline(if self.0 { "1" } else { "0" })
    }
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_bool(out, self.0)
    }
}

#[derive(Debug)]
pub(crate) struct IntHolder(pub(crate) i64);

impl Holder for IntHolder {
    fn kind(&self) -> Kind {
        Kind::Int
    }
    fn to_bool(&self) -> Option<bool> {
        Some(self.0 != 0)
    }
    fn to_int64(&self) -> Option<i64> {
        Some(self.0)
    }
    fn to_double(&self) -> Option<f64> {
        Some(self.0 as f64)
    }
    fn to_text(&self) -> VariantString {
        ecow::eco_format!("{}", self.0)
    }
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.0)
    }
}

#[derive(Debug)]
pub(crate) struct DoubleHolder(pub(crate) f64);

impl Holder for DoubleHolder {
    fn kind(&self) -> Kind {
        Kind::Double
    }
    fn to_bool(&self) -> Option<bool> {
        Some(self.0.abs() > f64::EPSILON)
    }
    fn to_int64(&self) -> Option<i64> {
        // Truncates toward zero through an i32; saturates, NaN becomes 0.
        Some(i64::from(self.0 as i32))
    }
    fn to_double(&self) -> Option<f64> {
        Some(self.0)
    }
    fn to_text(&self) -> VariantString {
        let mut text = VariantString::new();
        let _ = write_double(&mut text, self.0);
        text
    }
    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write_double(out, self.0)
    }
    fn write_text_precise(&self, out: &mut dyn fmt::Write, precision: usize) -> fmt::Result {
        write_double_precise(out, self.0, precision)
    }
}

#[derive(Debug)]
pub(crate) struct StringHolder(pub(crate) VariantString);

impl Holder for StringHolder {
    fn kind(&self) -> Kind {
        Kind::String
    }
    fn to_bool(&self) -> Option<bool> {
        match parse_bool_token(&self.0) {
            Some(value) => Some(value),
            None => parse_double(&self.0).map(|value| value.abs() > f64::EPSILON),
        }
    }
    fn to_int64(&self) -> Option<i64> {
        parse_int64(&self.0)
    }
    fn to_double(&self) -> Option<f64> {
        parse_double(&self.0)
    }
    fn to_text(&self) -> VariantString {
        self.0.clone()
    }

    fn can_cast_to_bool(&self) -> bool {
        parse_bool_token(&self.0).is_some() || self.can_cast_to_double()
    }
    fn can_cast_to_int(&self) -> bool {
        parse_int64(&self.0).is_some()
    }
    fn can_cast_to_double(&self) -> bool {
        parse_double(&self.0).is_some()
    }

    fn write_text(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.0)
    }
    /// Keeps at most `precision` characters, as `str` formatting does.
    fn write_text_precise(&self, out: &mut dyn fmt::Write, precision: usize) -> fmt::Result {
        match self.0.char_indices().nth(precision) {
            Some((end, _)) => out.write_str(&self.0[..end]),
            None => out.write_str(&self.0),
        }
    }
    fn write_wide(&self, out: &mut WideString) {
        out.push_str(&self.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_holders_always_convert() {
        let holders: [&dyn Holder; 3] = [&BoolHolder(true), &IntHolder(-3), &DoubleHolder(2.5)];
        for holder in holders {
            assert!(holder.can_cast_to_bool());
            assert!(holder.can_cast_to_int());
            assert!(holder.can_cast_to_double());
            assert!(holder.to_bool().is_some());
            assert!(holder.to_int64().is_some());
            assert!(holder.to_double().is_some());
        }
    }

    #[test]
    fn test_double_to_bool_uses_epsilon() {
        assert!(!DoubleHolder(0.0).to_bool().unwrap());
        assert!(!DoubleHolder(f64::EPSILON / 2.0).to_bool().unwrap());
        assert!(!DoubleHolder(-f64::EPSILON).to_bool().unwrap());
        assert!(DoubleHolder(-0.5).to_bool().unwrap());
        assert!(!DoubleHolder(f64::NAN).to_bool().unwrap());
    }

    #[test]
    fn test_double_to_int_goes_through_i32() {
        assert_eq!(DoubleHolder(-10.9).to_int64(), Some(-10));
        assert_eq!(DoubleHolder(1e10).to_int64(), Some(i64::from(i32::MAX)));
        assert_eq!(DoubleHolder(-1e10).to_int64(), Some(i64::from(i32::MIN)));
        assert_eq!(DoubleHolder(f64::NAN).to_int64(), Some(0));
    }

    #[test]
    fn test_string_probes_match_conversions() {
        for text in ["true", "FALSE", "0", "5", "1.5", "-7", "abc", "1.5$", ""] {
            let holder = StringHolder(text.into());
            assert_eq!(holder.can_cast_to_bool(), holder.to_bool().is_some(), "{text}");
            assert_eq!(holder.can_cast_to_int(), holder.to_int64().is_some(), "{text}");
            assert_eq!(holder.can_cast_to_double(), holder.to_double().is_some(), "{text}");
        }
    }

    #[test]
    fn test_text_matches_writer() {
        let holders: [&dyn Holder; 4] = [
            &BoolHolder(false),
            &IntHolder(i64::MIN),
            &DoubleHolder(-0.25),
            &StringHolder("日本語".into()),
        ];
        for holder in holders {
            let mut written = String::new();
            holder.write_text(&mut written).unwrap();
            assert_eq!(written, holder.to_text().as_str());
        }
    }
}
