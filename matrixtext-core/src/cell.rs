//! Conversion of a single whitespace-delimited token into a numeric cell.
//!
//! The accepted grammar is the one a browser text field would treat as a
//! number: signed decimal integers and floats (with optional exponent and
//! bare leading or trailing dots), signed `Infinity`, and unsigned `0x`, `0o`
//! and `0b` radix literals. `NaN` never counts as a number, and Rust-only
//! spellings such as `inf` are rejected.

const INFINITY: &str = "Infinity";

/// Converts `token` to an `f64`, returning `None` when it is not a number.
pub(crate) fn parse_cell(token: &str) -> Option<f64> {
    if let Some(value) = parse_infinity(token) {
        return Some(value);
    }
    if let Some(value) = parse_radix_literal(token) {
        return Some(value);
    }
    if !token.bytes().all(is_decimal_byte) {
        return None;
    }
    token.parse::<f64>().ok().filter(|value| !value.is_nan())
}

fn parse_infinity(token: &str) -> Option<f64> {
    match token.strip_prefix('-') {
        Some(rest) if rest == INFINITY => Some(f64::NEG_INFINITY),
        Some(_) => None,
        None => (token.strip_prefix('+').unwrap_or(token) == INFINITY).then_some(f64::INFINITY),
    }
}

fn parse_radix_literal(token: &str) -> Option<f64> {
    let (radix, digits) = split_radix_prefix(token)?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        return Some(0.0);
    }

    // Radix digits are ASCII, so byte offsets are digit offsets.
    let (head, tail) = significant.split_at(significant.len().min(u128_digits(radix)));
    let mut mantissa = u128::from_str_radix(head, radix).ok()?;
    // Sticky bit: keeps round-half-to-even exact when the tail is dropped.
    if tail.bytes().any(|byte| byte != b'0') {
        mantissa |= 1;
    }
    let shift = tail.len().checked_mul(bits_per_digit(radix))?;
    let scale = i32::try_from(shift).map_or(f64::INFINITY, |exp| 2.0_f64.powi(exp));
    Some(mantissa as f64 * scale)
}

const fn bits_per_digit(radix: u32) -> usize {
    match radix {
        16 => 4,
        8 => 3,
        _ => 1,
    }
}

/// Number of leading digits that always fit in a `u128`.
const fn u128_digits(radix: u32) -> usize {
    match radix {
        16 => 32,
        8 => 42,
        _ => 128,
    }
}

fn split_radix_prefix(token: &str) -> Option<(u32, &str)> {
    let rest = token.strip_prefix('0')?;
    let mut chars = rest.chars();
    let radix = match chars.next()? {
        'x' | 'X' => 16,
        'o' | 'O' => 8,
        'b' | 'B' => 2,
        _ => return None,
    };
    Some((radix, chars.as_str()))
}

/// Reports whether `c` separates cells: Unicode white space plus the byte
/// order mark, but not the C1 next-line control.
pub(crate) fn is_cell_separator(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

const fn is_decimal_byte(byte: u8) -> bool {
    byte.is_ascii_digit() || matches!(byte, b'.' | b'e' | b'E' | b'+' | b'-')
}
