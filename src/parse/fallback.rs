//! Reference decoder adapter.
//!
//! The fast core refuses inputs it cannot round with certainty; those are
//! re-decoded from the original text by the standard library's decimal
//! parser, which is correctly rounded for every finite input at any
//! precision. Non-finite results (overflow to infinity) are rejected
//! rather than surfaced.

use core::str;

/// Decodes the scanner-delimited numeral `s` exactly. Returns `None` for
/// results outside the finite binary64 range.
pub(crate) fn parse_float_fallback(s: &[u8]) -> Option<f64> {
    // The scanner only hands over bytes it matched against the grammar,
    // all of which are ASCII.
    let s = str::from_utf8(s).ok()?;
    let d: f64 = s.parse().ok()?;
    if !d.is_finite() {
        return None;
    }
    Some(d)
}
