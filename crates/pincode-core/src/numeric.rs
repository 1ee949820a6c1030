//! Loose numeric interpretation of typed text
//!
//! The `ONLY_NUMBER` rule accepts a keystroke when the cleaned text reads as
//! a non-negative number. "Reads as a number" is deliberately permissive:
//! decimals, exponents, radix-prefixed integers and `Infinity` all count, and
//! the empty string reads as zero.

/// Interpret `input` as a number.
///
/// Returns `None` when the text is not a numeric literal.
pub fn parse_number(input: &str) -> Option<f64> {
    let s = input.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    if let Some(value) = parse_radix(s) {
        return Some(value);
    }

    let (negative, unsigned) = match s.as_bytes()[0] {
        b'+' => (false, &s[1..]),
        b'-' => (true, &s[1..]),
        _ => (false, s),
    };

    if unsigned == "Infinity" {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    if !is_decimal_literal(unsigned) {
        return None;
    }

    // Grammar already checked, so the std parser only sees plain decimals.
    let value: f64 = unsigned.parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Whether `input` reads as a number that is zero or greater.
pub fn is_non_negative_number(input: &str) -> bool {
    parse_number(input).is_some_and(|n| n >= 0.0)
}

/// Whether `input` reads as a number at all.
pub fn is_numeric(input: &str) -> bool {
    parse_number(input).is_some()
}

fn parse_radix(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 3 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    s[2..].chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// `digits [. digits?] | . digits`, then an optional exponent.
fn is_decimal_literal(s: &str) -> bool {
    let bytes = s.as_bytes();
    let mut pos = 0;

    let int_digits = count_digits(&bytes[pos..]);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        frac_digits = count_digits(&bytes[pos..]);
        pos += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        pos += 1;
        if matches!(bytes.get(pos), Some(b'+' | b'-')) {
            pos += 1;
        }
        let exp_digits = count_digits(&bytes[pos..]);
        if exp_digits == 0 {
            return false;
        }
        pos += exp_digits;
    }

    pos == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
