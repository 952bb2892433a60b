//! Two-input functions: pow and hypot against the double-precision reference.

mod common;

use common::{check_binary, dispatchers, rng, uniform_f32, uniform_f64, Tolerance, SAMPLES};
use rand::Rng;
use simdly_math::BinaryOp;

#[test]
fn test_pow_precision_across_tiers() {
    let mut rng = rng();
    let base = uniform_f64(&mut rng, SAMPLES, 0.1, 10.0);
    let exponent = uniform_f64(&mut rng, SAMPLES, -10.0, 10.0);
    check_binary(BinaryOp::Pow, &base, &exponent, Tolerance::new(1e-10, 0.0));

    let base = uniform_f32(&mut rng, SAMPLES, 0.1, 10.0);
    let exponent = uniform_f32(&mut rng, SAMPLES, -10.0, 10.0);
    check_binary(BinaryOp::Pow, &base, &exponent, Tolerance::new(1e-4, 0.0));
}

#[test]
fn test_pow_negative_base_with_integer_exponent() {
    let mut rng = rng();
    let base = uniform_f64(&mut rng, SAMPLES, -10.0, -0.1);
    let exponent: Vec<f64> = (0..SAMPLES).map(|_| rng.random_range(-10..=10) as f64).collect();
    check_binary(BinaryOp::Pow, &base, &exponent, Tolerance::new(1e-10, 0.0));

    let fractional: Vec<f64> = exponent.iter().map(|e| e + 0.5).collect();
    for d in dispatchers() {
        let mut out = vec![0.0; base.len()];
        d.binary(BinaryOp::Pow, &base, &fractional, &mut out);
        assert!(out.iter().all(|v| v.is_nan()), "{}: negative base, fractional exponent", d.level());
    }
}

#[test]
fn test_pow_special_cases() {
    let cases: [(f64, f64, f64); 12] = [
        (2.0, 0.0, 1.0),
        (f64::NAN, 0.0, 1.0),
        (1.0, f64::NAN, 1.0),
        (-1.0, f64::INFINITY, 1.0),
        (0.0, 3.0, 0.0),
        (0.0, -1.0, f64::INFINITY),
        (-0.0, -3.0, f64::NEG_INFINITY),
        (2.0, 10.0, 1024.0),
        (-2.0, 3.0, -8.0),
        (f64::INFINITY, -1.0, 0.0),
        (0.5, f64::INFINITY, 0.0),
        (f64::NAN, 1.0, f64::NAN),
    ];
    let a: Vec<f64> = cases.iter().map(|c| c.0).collect();
    let b: Vec<f64> = cases.iter().map(|c| c.1).collect();
    for d in dispatchers() {
        let mut out = vec![0.0; a.len()];
        d.binary(BinaryOp::Pow, &a, &b, &mut out);
        for (&(x, y, want), &got) in cases.iter().zip(&out) {
            let ok = if want.is_nan() {
                got.is_nan()
            } else {
                got == want || (got - want).abs() <= 1e-12 * want.abs()
            };
            assert!(ok, "pow({x}, {y}) at {}: got {got}, want {want}", d.level());
        }
    }
}

#[test]
fn test_hypot_precision_across_tiers() {
    let mut rng = rng();
    let a = uniform_f64(&mut rng, SAMPLES, -1e3, 1e3);
    let b = uniform_f64(&mut rng, SAMPLES, -1e3, 1e3);
    check_binary(BinaryOp::Hypot, &a, &b, Tolerance::new(1e-14, 0.0));

    let a = uniform_f32(&mut rng, SAMPLES, -1e3, 1e3);
    let b = uniform_f32(&mut rng, SAMPLES, -1e3, 1e3);
    check_binary(BinaryOp::Hypot, &a, &b, Tolerance::new(1e-6, 0.0));
}

#[test]
fn test_hypot_does_not_overflow_or_underflow() {
    let a = [1e300f64, 3e-300, 0.0, f64::INFINITY, f64::NAN, -3.0];
    let b = [1e300f64, 4e-300, 0.0, f64::NAN, 1.0, 4.0];
    for d in dispatchers() {
        let mut out = [0.0f64; 6];
        d.binary(BinaryOp::Hypot, &a, &b, &mut out);
        assert!((out[0] / (1e300 * std::f64::consts::SQRT_2) - 1.0).abs() < 1e-15, "{}", d.level());
        assert!((out[1] / 5e-300 - 1.0).abs() < 1e-15, "{}", d.level());
        assert_eq!(out[2], 0.0);
        assert_eq!(out[3], f64::INFINITY);
        assert!(out[4].is_nan());
        assert_eq!(out[5], 5.0);
    }

    let a = [3e30f32, 1e-30];
    let b = [4e30f32, 1e-30];
    for d in dispatchers() {
        let mut out = [0.0f32; 2];
        d.binary(BinaryOp::Hypot, &a, &b, &mut out);
        assert!((out[0] / 5e30 - 1.0).abs() < 1e-6);
        assert!(out[1] > 1.4e-30 && out[1] < 1.42e-30);
    }
}
