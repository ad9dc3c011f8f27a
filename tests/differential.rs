//! Random bit-pattern differential test against the reference decoder.
//!
//! Draws random 64-bit patterns, keeps the normal doubles, formats them
//! with 17 significant digits in scientific form, and requires the parser
//! to reproduce the original bits. Iteration count defaults to 10^7 and
//! can be overridden with FASTDOUBLE_DIFF_ITERS.

use std::env;

use fastdouble::parse_number;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;

fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

fn iterations() -> u64 {
    env::var("FASTDOUBLE_DIFF_ITERS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(10_000_000)
}

fn check(d: f64) {
    let s = format!("{d:.16e}");
    let (x, n) = parse_number(s.as_bytes()).unwrap_or_else(|| panic!("refused to parse {s}"));
    assert_eq!(n, s.len(), "did not consume all of {s}");
    assert_eq!(
        x.to_bits(),
        d.to_bits(),
        "disagreement on {s}: got {x:e}, expected {d:e}"
    );
}

#[test]
fn random_bit_patterns_roundtrip() {
    let mut state = 0x1190u64;
    let mut done = 0u64;
    let total = iterations();
    while done < total {
        let d = f64::from_bits(lcg_next(&mut state));
        if !d.is_normal() {
            continue;
        }
        check(d);
        done += 1;
    }
}

#[test]
fn random_shortest_decimals_roundtrip() {
    let mut state = 0x4242u64;
    let mut done = 0u64;
    let total = iterations() / 10;
    while done < total {
        let d = f64::from_bits(lcg_next(&mut state));
        if !d.is_normal() {
            continue;
        }
        let s = format!("{d:e}");
        let expected: f64 = s.parse().unwrap();
        let (x, n) = parse_number(s.as_bytes()).unwrap_or_else(|| panic!("refused to parse {s}"));
        assert_eq!(n, s.len(), "did not consume all of {s}");
        assert_eq!(x.to_bits(), expected.to_bits(), "disagreement on {s}");
        done += 1;
    }
}

// Two ~1000-digit literals sitting exactly on the largest-subnormal and
// smallest-normal boundaries, decided far beyond 64-bit precision.
#[test]
fn long_boundary_decimals() {
    for (s, bits) in [
        (include_str!("data/halfway_a.txt").trim(), 0x001fffffffffffffu64),
        (include_str!("data/halfway_b.txt").trim(), 0x000fffffffffffffu64),
    ] {
        let (x, n) = parse_number(s.as_bytes()).expect("refused long boundary decimal");
        assert_eq!(n, s.len());
        assert_eq!(
            x.to_bits(),
            bits,
            "disagreement on a {}-digit literal",
            s.len()
        );
    }

    // trailing junk terminates the scan instead of failing it
    let with_tail = format!("{},", include_str!("data/halfway_a.txt").trim());
    let (x, n) = parse_number(with_tail.as_bytes()).expect("refused with trailing comma");
    assert_eq!(n, with_tail.len() - 1);
    assert_eq!(x.to_bits(), 0x001fffffffffffffu64);
}
