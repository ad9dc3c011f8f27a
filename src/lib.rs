//! Fast, correctly rounded ASCII decimal to binary64 conversion.
//!
//! The fast paths decide the vast majority of inputs with fixed-width
//! integer arithmetic and a precomputed power-of-ten table; the rest are
//! delegated to an exact reference decoder and verified finite.

pub mod parse;

pub use parse::{compute_float_64, parse_double, parse_number, LARGEST_POWER, SMALLEST_POWER};

#[cfg(test)]
mod tests {
    use super::{compute_float_64, parse_double, parse_number};

    const RNG_A: u64 = 6364136223846793005;
    const RNG_C: u64 = 1442695040888963407;

    fn lcg_next(state: &mut u64) -> u64 {
        *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
        *state
    }

    fn random_normal(state: &mut u64) -> f64 {
        loop {
            let d = f64::from_bits(lcg_next(state));
            if d.is_normal() {
                return d;
            }
        }
    }

    fn check_roundtrip(d: f64) {
        let s = format!("{d:.16e}");
        let (x, n) =
            parse_number(s.as_bytes()).unwrap_or_else(|| panic!("refused to parse {s}"));
        assert_eq!(n, s.len(), "did not consume all of {s}");
        assert_eq!(
            x.to_bits(),
            d.to_bits(),
            "disagreement on {s}: got {x:e}, expected {d:e}"
        );
    }

    fn check_against_reference(s: &str) {
        let expected: f64 = s.parse().unwrap();
        let (x, n) =
            parse_number(s.as_bytes()).unwrap_or_else(|| panic!("refused to parse {s}"));
        assert_eq!(n, s.len(), "did not consume all of {s}");
        assert_eq!(
            x.to_bits(),
            expected.to_bits(),
            "disagreement on {s}: got {x:e}, expected {expected:e}"
        );
    }

    #[test]
    fn zero_forms() {
        let (d, n) = parse_number(b"0").unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(n, 1);

        let (d, n) = parse_number(b"-0").unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(n, 2);

        let (d, n) = parse_number(b"0e+42949672970").unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(n, 14);

        let (d, _) = parse_number(b"0.00000").unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn grammar_rejections() {
        let bad: &[&[u8]] = &[
            b"",
            b"-",
            b"+1",
            b"+0",
            b".5",
            b"-.5",
            b"0.",
            b"1.",
            b"1.e5",
            b"00",
            b"01",
            b"-00",
            b"e1",
            b"E1",
            b"1e",
            b"1e+",
            b"1e-",
            b"1ee5",
            b"-e1",
            b" 1",
            b"infinity",
            b"nan",
        ];
        for &s in bad {
            assert!(
                parse_number(s).is_none(),
                "accepted {:?}",
                core::str::from_utf8(s).unwrap()
            );
        }
    }

    #[test]
    fn partial_consumption() {
        let (d, n) = parse_number(b"1.5,\"key\"").unwrap();
        assert_eq!(d, 1.5);
        assert_eq!(n, 3);

        let (d, n) = parse_number(b"0,").unwrap();
        assert_eq!(d, 0.0);
        assert_eq!(n, 1);

        let (d, n) = parse_number(b"3e2]").unwrap();
        assert_eq!(d, 300.0);
        assert_eq!(n, 3);

        // an exponent marker without digits rejects the whole numeral
        assert!(parse_number(b"1e,").is_none());
    }

    #[test]
    fn known_hard_values() {
        // 19+ significant digits force the wide product path
        let (d, _) = parse_number(b"1090544144181609348835077142190").unwrap();
        assert_eq!(d.to_bits(), 0x462b8779f2474dfb);

        // ties between adjacent doubles round to even
        check_against_reference("4503599627370496.5");
        check_against_reference("4503599627370497.5");

        // bails out of the 192-bit refinement
        check_against_reference("7.3177701707893310e+15");
        // rounding carry into the next binade
        check_against_reference("7.2057594037927933e+16");
        // exact halfway case, undecidable without more digits
        check_against_reference("1e23");
        check_against_reference("7e23");
        check_against_reference("9007199254740995");
    }

    #[test]
    fn leading_zero_exponent_digits() {
        let (d, n) = parse_number(b"5e0012").unwrap();
        assert_eq!(d, 5e12);
        assert_eq!(n, 6);
    }

    #[test]
    fn oversized_exponents() {
        // far overflow: the reference decoder signals infinity, reported
        // as failure
        assert!(parse_number(b"1e99999999999999999999").is_none());
        assert!(parse_number(b"1e309").is_none());
        // far underflow collapses to zero, which is finite and accepted
        let (d, _) = parse_number(b"1e-99999999999999999999").unwrap();
        assert_eq!(d, 0.0);
    }

    #[test]
    fn compute_powers_of_ten_directly() {
        for p in -306..=308i64 {
            if p == 23 {
                // exactly halfway between two doubles; the core must defer
                assert!(compute_float_64(p, 1, false).is_none());
                continue;
            }
            let expected: f64 = format!("1e{p}").parse().unwrap();
            let d =
                compute_float_64(p, 1, false).unwrap_or_else(|| panic!("core refused 10^{p}"));
            assert_eq!(
                d.to_bits(),
                expected.to_bits(),
                "bad value for 10^{p}: got {d:e}, expected {expected:e}"
            );
        }
    }

    #[test]
    fn parse_powers_of_ten() {
        // subnormal powers below 1e-308 go through delegation and still
        // come back bit-exact
        for p in -325..=308i64 {
            check_against_reference(&format!("1e{p}"));
        }
    }

    #[test]
    fn clinger_window_exactness() {
        let samples: &[u64] = &[1, 3, 7, 42, 12345, 999999999, 9007199254740991];
        for &n in samples {
            for q in 0..=22i64 {
                let ten_q: f64 = format!("1e{q}").parse().unwrap();
                let expected = n as f64 * ten_q;
                let got = parse_double(&format!("{n}e{q}")).unwrap();
                assert_eq!(
                    got.to_bits(),
                    expected.to_bits(),
                    "clinger mismatch for {n}e{q}"
                );
                let got = parse_double(&format!("-{n}e{q}")).unwrap();
                assert_eq!(
                    got.to_bits(),
                    (-expected).to_bits(),
                    "clinger mismatch for -{n}e{q}"
                );
            }
        }
    }

    #[test]
    fn sign_symmetry() {
        let inputs = [
            "1",
            "0.5",
            "65.613616999999977",
            "1090544144181609348835077142190",
            "2.22507e-308",
            "1.79769e+308",
            "7.3177701707893310e+15",
        ];
        for s in inputs {
            let pos = parse_double(s).unwrap();
            let neg = parse_double(&format!("-{s}")).unwrap();
            assert_eq!(neg.to_bits(), (-pos).to_bits(), "sign asymmetry on {s}");
        }
    }

    #[test]
    fn boundary_magnitudes() {
        for s in [
            "1.0e-308",
            "0.1e-308",
            "0.01e-307",
            "1.79769e+308",
            "2.22507e-308",
            "-1.79769e+308",
            "-2.22507e-308",
            "1e-308",
            "-65.613616999999977",
        ] {
            check_against_reference(s);
        }
    }

    #[test]
    fn random_differential_smoke() {
        let mut state = 0x1190u64;
        for _ in 0..20000 {
            let d = random_normal(&mut state);
            check_roundtrip(d);
        }
    }

    #[test]
    fn random_shortest_form_smoke() {
        let mut state = 0x7777u64;
        for _ in 0..20000 {
            let d = random_normal(&mut state);
            let s = format!("{d:e}");
            check_against_reference(&s);
        }
    }
}
