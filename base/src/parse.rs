//! Strict whole-string scanners for text held in a variant.
//!
//! Both scanners skip leading C whitespace, then require the entire rest of
//! the input to be a single numeric token. Partial matches and out of range
//! values are rejected, never clamped.

use unscanny::Scanner;

/// The characters C's `isspace` accepts in the "C" locale.
pub fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Parses a base-10 `i64`, e.g. `" -42"`, `"+7"`.
pub fn parse_int64(text: &str) -> Option<i64> {
    let mut scanner = Scanner::new(text);
    scanner.eat_while(is_c_space);
    let start = scanner.cursor();
    scanner.eat_if(|c: char| c == '+' || c == '-');
    let digits = scanner.eat_while(|c: char| c.is_ascii_digit());
    if digits.is_empty() || !scanner.done() {
        return None;
    }
    scanner.from(start).parse::<i64>().ok()
}

/// Parses an `f64` literal, including `inf`, `infinity` and `nan` in any case.
///
/// A finite literal that overflows to infinity fails, as does a literal with a
/// nonzero mantissa whose value underflows to zero or into the subnormal range.
pub fn parse_double(text: &str) -> Option<f64> {
    let mut scanner = Scanner::new(text);
    scanner.eat_while(is_c_space);
    let literal = scanner.after();
    let value = literal.parse::<f64>().ok()?;
    if value.is_infinite() && !names_infinity(literal) {
        return None;
    }
    if value.is_finite() && !value.is_normal() && has_nonzero_mantissa(literal) {
        return None;
    }
    Some(value)
}

/// Matches the literal tokens `true` and `false`, ignoring ASCII case.
pub fn parse_bool_token(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn names_infinity(literal: &str) -> bool {
    let unsigned = literal.trim_start_matches(['+', '-']);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

fn has_nonzero_mantissa(literal: &str) -> bool {
    literal
        .chars()
        .take_while(|c| !matches!(c, 'e' | 'E'))
        .any(|c| matches!(c, '1'..='9'))
}
