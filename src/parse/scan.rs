//! Strict decimal scanner and the public parse entry points.
//!
//! Grammar: `[-] ( '0' | [1-9][0-9]* ) ( '.' [0-9]+ )? ( [eE] [+-]? [0-9]+ )?`.
//! No leading `+`, no leading zeros, no whitespace, no NaN/Infinity
//! literals. Digits accumulate into a wrapping u64; a significant-digit
//! count taken afterwards decides whether the accumulator can be trusted.

use super::fallback::parse_float_fallback;
use super::{compute_float_64, is_digit, LARGEST_POWER, SMALLEST_POWER};

/// Exponent digits stop updating the accumulator once it reaches 2^32;
/// anything that large is far outside the representable range either way.
const EXP_ACC_CAP: i64 = 0x100000000;

/// Parses the decimal numeral at the start of `s`.
///
/// On success returns the value and the number of bytes consumed; trailing
/// bytes are left for the caller (the first byte past a valid numeral
/// terminates the scan, so embedding in JSON-like input works directly).
/// Returns `None` if the prefix does not match the grammar or the value
/// cannot be decoded to a finite binary64.
#[inline]
pub fn parse_number(s: &[u8]) -> Option<(f64, usize)> {
    let mut p = 0usize;
    let negative = s.first() == Some(&b'-');
    if negative {
        p += 1;
        // a negative sign must be followed by a digit
        if !s.get(p).copied().is_some_and(is_digit) {
            return None;
        }
    }
    let start_digits = p;

    let mut w: u64;
    if s.get(p) == Some(&b'0') {
        p += 1;
        // 0 cannot be followed by another digit
        if s.get(p).copied().is_some_and(is_digit) {
            return None;
        }
        w = 0;
    } else {
        if !s.get(p).copied().is_some_and(is_digit) {
            return None;
        }
        w = (s[p] - b'0') as u64;
        p += 1;
        while p < s.len() && is_digit(s[p]) {
            // may wrap; the digit count check below catches that case
            w = w.wrapping_mul(10).wrapping_add((s[p] - b'0') as u64);
            p += 1;
        }
    }

    let mut exponent: i64 = 0;
    if s.get(p) == Some(&b'.') {
        p += 1;
        let first_after_period = p;
        if !s.get(p).copied().is_some_and(is_digit) {
            // a fraction needs at least one digit
            return None;
        }
        while p < s.len() && is_digit(s[p]) {
            w = w.wrapping_mul(10).wrapping_add((s[p] - b'0') as u64);
            p += 1;
        }
        exponent = -((p - first_after_period) as i64);
    }

    // used below to guard against a wrapped w; the -1 discounts the '.'
    let mut digit_count = (p - start_digits) as i64 - 1;

    if matches!(s.get(p), Some(&(b'e' | b'E'))) {
        p += 1;
        let neg_exp = match s.get(p) {
            Some(&b'-') => {
                p += 1;
                true
            }
            Some(&b'+') => {
                p += 1;
                false
            }
            _ => false,
        };
        if !s.get(p).copied().is_some_and(is_digit) {
            return None;
        }
        let mut exp_number: i64 = 0;
        while p < s.len() && is_digit(s[p]) {
            if exp_number < EXP_ACC_CAP {
                exp_number = 10 * exp_number + (s[p] - b'0') as i64;
            }
            p += 1;
        }
        exponent += if neg_exp { -exp_number } else { exp_number };
    }

    if digit_count >= 19 {
        // w may have wrapped, unless the count was inflated by leading
        // zeros (0.0000...); recount without them.
        let mut start = start_digits;
        while start < p && (s[start] == b'0' || s[start] == b'.') {
            start += 1;
        }
        digit_count -= (start - start_digits) as i64;
        if digit_count >= 19 {
            return parse_float_fallback(&s[..p]).map(|d| (d, p));
        }
    }
    if !(SMALLEST_POWER..=LARGEST_POWER).contains(&exponent) {
        return parse_float_fallback(&s[..p]).map(|d| (d, p));
    }

    match compute_float_64(exponent, w, negative) {
        Some(d) => Some((d, p)),
        None => parse_float_fallback(&s[..p]).map(|d| (d, p)),
    }
}

/// Parses a string that must consist of exactly one numeral.
#[inline]
pub fn parse_double(s: &str) -> Option<f64> {
    match parse_number(s.as_bytes()) {
        Some((d, n)) if n == s.len() => Some(d),
        _ => None,
    }
}
