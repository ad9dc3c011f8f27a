#![cfg(feature = "mpfr")]

//! Cross-check the decoder against MPFR instead of the built-in reference.
//!
//! MPFR's string conversion is correctly rounded at any precision; parsing
//! straight at 53 bits lands on binary64 with no intermediate rounding.

use std::env;

use fastdouble::parse_double;
use rug::float::Round;
use rug::Float;

const F64_PREC: u32 = 53;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;

fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

fn mpfr_parse_f64(s: &str) -> f64 {
    let incomplete = Float::parse(s).expect("mpfr rejected input");
    let f = Float::with_val_round(F64_PREC, incomplete, Round::Nearest).0;
    f.to_f64()
}

fn iterations() -> u64 {
    env::var("FASTDOUBLE_MPFR_ITERS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1_000_000)
}

#[test]
fn mpfr_agreement_on_random_normals() {
    let mut state = 0xd1ceu64;
    let mut done = 0u64;
    let total = iterations();
    while done < total {
        let d = f64::from_bits(lcg_next(&mut state));
        if !d.is_normal() {
            continue;
        }
        let s = format!("{d:.16e}");
        let expected = mpfr_parse_f64(&s);
        let got = parse_double(&s).unwrap_or_else(|| panic!("refused to parse {s}"));
        assert_eq!(
            got.to_bits(),
            expected.to_bits(),
            "mpfr disagreement on {s}: got {got:e}, expected {expected:e}"
        );
        done += 1;
    }
}

#[test]
fn mpfr_agreement_on_fixed_corpus() {
    for s in [
        "1090544144181609348835077142190",
        "4503599627370496.5",
        "4503599627370497.5",
        "7.3177701707893310e+15",
        "7.2057594037927933e+16",
        "1e23",
        "7e23",
        "9007199254740995",
        "2.2250738585072014e-308",
        "1.7976931348623157e308",
        "-65.613616999999977",
    ] {
        let expected = mpfr_parse_f64(s);
        let got = parse_double(s).unwrap_or_else(|| panic!("refused to parse {s}"));
        assert_eq!(
            got.to_bits(),
            expected.to_bits(),
            "mpfr disagreement on {s}"
        );
    }
}
