//! Accuracy of sine, cosine and tangent on every tier.

mod common;

use common::{
    check_specials, check_unary, decades_f32, decades_f64, dispatchers, rng, uniform_f32, uniform_f64,
    Tolerance, SAMPLES,
};
use simdly_math::UnaryOp;

const F32_TOL: Tolerance = Tolerance::new(1e-5, 1e-6);
const F64_TOL: Tolerance = Tolerance::new(1e-12, 1e-14);

#[test]
fn test_sin_cos_precision_across_tiers() {
    let mut rng = rng();
    for op in [UnaryOp::Sin, UnaryOp::Cos] {
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, -10.0, 10.0), F32_TOL);
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, -1000.0, 1000.0), F32_TOL);
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, -8192.0, 8192.0), F32_TOL);
        check_unary(op, &uniform_f64(&mut rng, SAMPLES, -10.0, 10.0), F64_TOL);
        check_unary(op, &uniform_f64(&mut rng, SAMPLES, -1e4, 1e4), F64_TOL);
        println!("{op}: ok");
    }
}

#[test]
fn test_tan_precision_across_tiers() {
    let mut rng = rng();
    check_unary(UnaryOp::Tan, &uniform_f32(&mut rng, SAMPLES, -1.5, 1.5), F32_TOL);
    check_unary(UnaryOp::Tan, &uniform_f32(&mut rng, SAMPLES, -1000.0, 1000.0), F32_TOL);
    check_unary(UnaryOp::Tan, &uniform_f64(&mut rng, SAMPLES, -1.5, 1.5), F64_TOL);
    check_unary(UnaryOp::Tan, &uniform_f64(&mut rng, SAMPLES, -1e4, 1e4), Tolerance::new(1e-11, 1e-14));
}

#[test]
fn test_huge_arguments_across_tiers() {
    let mut rng = rng();
    let mut xf = decades_f32(&mut rng, SAMPLES, 5.0, 38.5);
    xf.extend([3e6, 1e10, 1e20, f32::MAX, -f32::MAX]);
    let mut x = decades_f64(&mut rng, SAMPLES, 7.0, 308.0);
    x.extend([1e16, 1e20, 1e300, f64::MAX, -f64::MAX]);

    for op in [UnaryOp::Sin, UnaryOp::Cos] {
        check_unary(op, &xf, F32_TOL);
        check_unary(op, &x, F64_TOL);
    }
    check_unary(UnaryOp::Tan, &xf, F32_TOL);
    check_unary(UnaryOp::Tan, &x, Tolerance::new(1e-11, 1e-14));
}

#[test]
fn test_tiny_arguments_pass_through() {
    let tiny = [1e-20f64, -3e-300, 2.5e-10];
    check_unary(UnaryOp::Sin, &tiny, F64_TOL);
    check_unary(UnaryOp::Tan, &tiny, F64_TOL);
    check_unary(UnaryOp::Cos, &tiny, F64_TOL);
}

#[test]
fn test_pythagorean_identity() {
    let mut rng = rng();
    let mut x = uniform_f64(&mut rng, SAMPLES, -100.0, 100.0);
    x.extend(decades_f64(&mut rng, SAMPLES, 2.0, 308.0));
    let mut xf = uniform_f32(&mut rng, SAMPLES, -100.0, 100.0);
    xf.extend(decades_f32(&mut rng, SAMPLES, 2.0, 38.5));
    for d in dispatchers() {
        let mut s = vec![0.0; x.len()];
        let mut c = vec![0.0; x.len()];
        d.unary(UnaryOp::Sin, &x, &mut s);
        d.unary(UnaryOp::Cos, &x, &mut c);
        let worst = s
            .iter()
            .zip(&c)
            .map(|(s, c)| (s * s + c * c - 1.0).abs())
            .fold(0.0f64, f64::max);
        println!("{}: max |sin² + cos² − 1| = {worst:.2e}", d.level());
        assert!(worst < 1e-14);

        let mut s = vec![0.0f32; xf.len()];
        let mut c = vec![0.0f32; xf.len()];
        d.unary(UnaryOp::Sin, &xf, &mut s);
        d.unary(UnaryOp::Cos, &xf, &mut c);
        for (s, c) in s.iter().zip(&c) {
            assert!((s * s + c * c - 1.0).abs() < 1e-5, "{}: sin = {s}, cos = {c}", d.level());
        }
    }
}

#[test]
fn test_trig_special_values() {
    check_specials(
        UnaryOp::Sin,
        &[
            (0.0f64, 0.0),
            (-0.0, -0.0),
            (f64::INFINITY, f64::NAN),
            (f64::NEG_INFINITY, f64::NAN),
            (f64::NAN, f64::NAN),
        ],
    );
    check_specials(
        UnaryOp::Cos,
        &[(0.0f32, 1.0), (-0.0, 1.0), (f32::INFINITY, f32::NAN), (f32::NAN, f32::NAN)],
    );
    check_specials(
        UnaryOp::Tan,
        &[(0.0f32, 0.0), (-0.0, -0.0), (f32::NEG_INFINITY, f32::NAN), (f32::NAN, f32::NAN)],
    );
}

#[test]
fn test_sin_is_odd_and_cos_is_even() {
    let mut rng = rng();
    let x = uniform_f64(&mut rng, 257, -50.0, 50.0);
    let neg: Vec<f64> = x.iter().map(|v| -v).collect();
    for d in dispatchers() {
        let (mut a, mut b) = (vec![0.0; x.len()], vec![0.0; x.len()]);
        d.unary(UnaryOp::Sin, &x, &mut a);
        d.unary(UnaryOp::Sin, &neg, &mut b);
        assert!(a.iter().zip(&b).all(|(p, q)| p == &-q), "sin parity at {}", d.level());

        d.unary(UnaryOp::Cos, &x, &mut a);
        d.unary(UnaryOp::Cos, &neg, &mut b);
        assert_eq!(a, b, "cos parity at {}", d.level());
    }
}
