//! Correctly rounded w * 10^q to binary64.
//!
//! Two tiers: a Clinger exact path when both operands are representable
//! doubles and one multiply or divide settles the result, and a
//! fixed-width integer path that multiplies the normalized significand by
//! a truncated 128-bit power-of-ten mantissa, refining to 192 bits when
//! the top product alone cannot decide the rounding.

use super::full_multiplication;
use super::pow10_data::{POW10_COMPONENTS, SMALLEST_POWER};

/// Largest w for which `w as f64` is lossless: 2^53 - 1.
const FAST_PATH_MAX_W: u64 = 9007199254740991;

/// Powers of ten representable exactly in binary64.
#[rustfmt::skip]
static POWER_OF_TEN: [f64; 23] = [
    1e0,  1e1,  1e2,  1e3,  1e4,  1e5,  1e6,  1e7,  1e8,  1e9,  1e10, 1e11,
    1e12, 1e13, 1e14, 1e15, 1e16, 1e17, 1e18, 1e19, 1e20, 1e21, 1e22,
];

/// Computes the binary64 value nearest to `(-1)^negative * w * 10^power`
/// under round-half-to-even, using only the precomputed tables and 64-bit
/// integer arithmetic.
///
/// Returns `None` when the tables do not carry enough precision to commit
/// to a rounding, or when the result would be subnormal or infinite; the
/// caller is expected to re-decode the original text with a slower exact
/// decoder. The caller must guarantee
/// `SMALLEST_POWER <= power <= LARGEST_POWER`.
#[inline(always)]
pub fn compute_float_64(power: i64, w: u64, negative: bool) -> Option<f64> {
    if w == 0 {
        return Some(if negative { -0.0 } else { 0.0 });
    }

    // Clinger's fast path: w and 10^|power| are both exact doubles, so a
    // single rounded multiply or divide gives the correctly rounded result.
    // Rust evaluates f64 strictly, so the divide direction is safe too.
    if (-22..=22).contains(&power) && w <= FAST_PATH_MAX_W {
        let mut d = w as f64;
        if power < 0 {
            d /= POWER_OF_TEN[(-power) as usize];
        } else {
            d *= POWER_OF_TEN[power as usize];
        }
        return Some(if negative { -d } else { d });
    }

    // 10^q = 5^q * 2^q, and the power of two folds into the binary
    // exponent, so only the power-of-five significand needs a table.
    let (factor_hi, factor_lo) = POW10_COMPONENTS[(power - SMALLEST_POWER) as usize];

    // (((152170 + 65536) * q) >> 16) == floor(log2(5^q)) + q over the table
    // range; 1024 is the IEEE bias, 63 accounts for the 64-bit significand.
    let exponent = (((152170 + 65536) * power) >> 16) + 1024 + 63;

    let lz = w.leading_zeros() as i64;
    let w = w << lz;

    // Top 128 bits of w * 10^power. Both operands have their high bit set,
    // so the product occupies one of the two topmost bit positions.
    let (mut upper, mut lower) = full_multiplication(w, factor_hi);

    // The table mantissa is truncated, so the true product exceeds this one
    // by less than w ulps of the factor. Unless the 9 bits below the
    // extracted mantissa are all ones and adding w overflows the low word,
    // that error cannot reach the rounding decision.
    if (upper & 0x1ff) == 0x1ff && lower.wrapping_add(w) < lower {
        let (low_hi, low_lo) = full_multiplication(w, factor_lo);
        let mut product_high = upper;
        let product_middle = lower.wrapping_add(low_hi);
        if product_middle < lower {
            product_high += 1; // overflow carry
        }
        // Even 192 bits may sit too close to a boundary to decide.
        // Happens with e.g. 7.3177701707893310e+15.
        if product_middle.wrapping_add(1) == 0
            && (product_high & 0x1ff) == 0x1ff
            && low_lo.wrapping_add(w) < low_lo
        {
            return None;
        }
        upper = product_high;
        lower = product_middle;
    }

    // Shift so the mantissa occupies 54 bits with a leading 1.
    let upperbit = upper >> 63;
    let mut mantissa = upper >> (upperbit + 9);
    let mut lz = lz + (1 ^ upperbit) as i64;

    // A value exactly at (or a half-ulp from) a representable double cannot
    // be rounded here: digits beyond the carried precision decide the tie.
    // Triggered by 1e23.
    if lower == 0 && (upper & 0x1ff) == 0 && (mantissa & 3) == 1 {
        return None;
    }

    // Round half to even.
    mantissa += mantissa & 1;
    mantissa >>= 1;
    if mantissa >= 1 << 53 {
        // Rounding carried into the next binade, e.g. 7.2057594037927933e+16.
        mantissa = 1 << 52;
        lz -= 1;
    }
    mantissa &= !(1u64 << 52);

    let real_exponent = exponent - lz;
    // Subnormal or infinite: defer.
    if !(1..=2046).contains(&real_exponent) {
        return None;
    }

    let mut bits = mantissa | ((real_exponent as u64) << 52);
    bits |= (negative as u64) << 63;
    Some(f64::from_bits(bits))
}
