#![allow(dead_code)]

use criterion::{black_box, BenchmarkGroup, Criterion};
use std::time::Duration;

const RNG_A: u64 = 6364136223846793005;
const RNG_C: u64 = 1442695040888963407;
const RNG_DENOM: f64 = (1u64 << 53) as f64;

pub fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(RNG_A).wrapping_add(RNG_C);
    *state
}

pub fn uniform_f64(state: &mut u64) -> f64 {
    let bits = lcg_next(state) >> 11;
    (bits as f64) / RNG_DENOM
}

fn random_normal(state: &mut u64) -> f64 {
    loop {
        let d = f64::from_bits(lcg_next(state));
        if d.is_normal() {
            return d;
        }
    }
}

/// Random finite doubles across the whole exponent range, 17 significant
/// digits, scientific form.
pub fn gen_scientific(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(format!("{:.16e}", random_normal(&mut state)));
    }
    values
}

/// Shortest round-trip forms, the shape most JSON emitters produce.
pub fn gen_shortest(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(format!("{:e}", random_normal(&mut state)));
    }
    values
}

/// Fixed-point values in [min, max) with six fractional digits.
pub fn gen_fixed(count: usize, min: f64, max: f64, seed: u64) -> Vec<String> {
    let mut state = seed;
    let span = max - min;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        let x = min + uniform_f64(&mut state) * span;
        values.push(format!("{x:.6}"));
    }
    values
}

/// Small plain integers.
pub fn gen_integers(count: usize, seed: u64) -> Vec<String> {
    let mut state = seed;
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(format!("{}", lcg_next(&mut state) >> 40));
    }
    values
}

pub fn bench_inputs<F, G>(
    group: &mut BenchmarkGroup<'_, criterion::measurement::WallTime>,
    inputs: &[String],
    fast: F,
    reference: G,
) where
    F: Fn(&str) -> f64 + Copy,
    G: Fn(&str) -> f64 + Copy,
{
    group.bench_function("fastdouble", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for s in inputs {
                acc += fast(black_box(s.as_str()));
            }
            black_box(acc)
        })
    });
    group.bench_function("std", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for s in inputs {
                acc += reference(black_box(s.as_str()));
            }
            black_box(acc)
        })
    });
}

pub fn configure_criterion() -> Criterion {
    Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(10))
        .warm_up_time(Duration::from_secs(5))
}
