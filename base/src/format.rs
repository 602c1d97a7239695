use std::fmt;
use std::fmt::Write as _;

/// Writes `value` the way C's `%f` does: fixed notation, six fraction digits.
pub(crate) fn write_double(out: &mut dyn fmt::Write, value: f64) -> fmt::Result {
    if value.is_nan() {
        out.write_str(if value.is_sign_negative() { "-nan" } else { "nan" })
    } else {
        write!(out, "{value:.6}")
    }
}

/// Writes `value` with `precision` fraction digits.
pub(crate) fn write_double_precise(
    out: &mut dyn fmt::Write,
    value: f64,
    precision: usize,
) -> fmt::Result {
    if value.is_nan() {
        write_double(out, value)
    } else {
        write!(out, "{value:.precision$}")
    }
}

/// Pads `text` to the formatter's width using its fill and alignment.
/// Unlike `Formatter::pad` the precision is not applied again.
pub(crate) fn pad_to_width(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let len = text.chars().count();
    let padding = f.width().map_or(0, |width| width.saturating_sub(len));
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Left) | None => (0, padding),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    f.write_str(text)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

pub(crate) fn write_bool(out: &mut dyn fmt::Write, value: bool) -> fmt::Result {
    out.write_char(if value { '1' } else { '0' })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double(value: f64) -> String {
        let mut out = String::new();
        write_double(&mut out, value).unwrap();
        out
    }

    #[test]
    fn test_fixed_six_digits() {
        assert_eq!(double(100.5), "100.500000");
        assert_eq!(double(0.0), "0.000000");
        assert_eq!(double(-10.1), "-10.100000");
        assert_eq!(double(1e-7), "0.000000");
        assert_eq!(double(1e16), "10000000000000000.000000");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(double(f64::NAN), "nan");
        assert_eq!(double(f64::INFINITY), "inf");
        assert_eq!(double(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_precise_digits() {
        let mut out = String::new();
        write_double_precise(&mut out, 1.5, 2).unwrap();
        out.push(' ');
        write_double_precise(&mut out, -2.0, 0).unwrap();
        out.push(' ');
        write_double_precise(&mut out, f64::NAN, 3).unwrap();
        assert_eq!(out, "1.50 -2 nan");
    }

    #[test]
    fn test_bool_digits() {
        let mut out = String::new();
        write_bool(&mut out, true).unwrap();
        write_bool(&mut out, false).unwrap();
        assert_eq!(out, "10");
    }
}
