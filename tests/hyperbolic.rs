//! Accuracy and special values of the hyperbolic functions and their inverses.

mod common;

use common::{check_specials, check_unary, rng, uniform_f32, uniform_f64, Tolerance, SAMPLES};
use simdly_math::UnaryOp;

const F32_TOL: Tolerance = Tolerance::new(1e-5, 1e-6);
const F64_TOL: Tolerance = Tolerance::new(1e-12, 1e-15);

#[test]
fn test_sinh_cosh_precision_across_tiers() {
    let mut rng = rng();
    for op in [UnaryOp::Sinh, UnaryOp::Cosh] {
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, -2.0, 2.0), F32_TOL);
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, -88.0, 88.0), F32_TOL);
        check_unary(op, &uniform_f64(&mut rng, SAMPLES, -2.0, 2.0), F64_TOL);
        check_unary(op, &uniform_f64(&mut rng, SAMPLES, -700.0, 700.0), F64_TOL);
        println!("{op}: ok");
    }
}

#[test]
fn test_asinh_precision_across_tiers() {
    let mut rng = rng();
    check_unary(UnaryOp::Asinh, &uniform_f32(&mut rng, SAMPLES, -3.0, 3.0), F32_TOL);
    check_unary(UnaryOp::Asinh, &uniform_f32(&mut rng, SAMPLES, -1e6, 1e6), F32_TOL);
    check_unary(UnaryOp::Asinh, &uniform_f64(&mut rng, SAMPLES, -3.0, 3.0), F64_TOL);
    check_unary(UnaryOp::Asinh, &uniform_f64(&mut rng, SAMPLES, -1e12, 1e12), F64_TOL);
}

#[test]
fn test_acosh_precision_across_tiers() {
    let mut rng = rng();
    check_unary(UnaryOp::Acosh, &uniform_f32(&mut rng, SAMPLES, 1.0, 3.0), F32_TOL);
    check_unary(UnaryOp::Acosh, &uniform_f32(&mut rng, SAMPLES, 1.0, 1e6), F32_TOL);
    check_unary(UnaryOp::Acosh, &uniform_f64(&mut rng, SAMPLES, 1.0, 3.0), F64_TOL);
    check_unary(UnaryOp::Acosh, &uniform_f64(&mut rng, SAMPLES, 1.0, 1e12), F64_TOL);
}

#[test]
fn test_atanh_precision_across_tiers() {
    let mut rng = rng();
    check_unary(UnaryOp::Atanh, &uniform_f32(&mut rng, SAMPLES, -0.999, 0.999), F32_TOL);
    check_unary(UnaryOp::Atanh, &uniform_f64(&mut rng, SAMPLES, -0.999, 0.999), F64_TOL);
    check_unary(UnaryOp::Atanh, &uniform_f64(&mut rng, SAMPLES, -1e-6, 1e-6), F64_TOL);
}

#[test]
fn test_hyperbolic_special_values() {
    check_specials(
        UnaryOp::Sinh,
        &[
            (0.0f64, 0.0),
            (-0.0, -0.0),
            (f64::INFINITY, f64::INFINITY),
            (f64::NEG_INFINITY, f64::NEG_INFINITY),
            (800.0, f64::INFINITY),
            (f64::NAN, f64::NAN),
        ],
    );
    check_specials(
        UnaryOp::Cosh,
        &[
            (0.0f32, 1.0),
            (f32::INFINITY, f32::INFINITY),
            (f32::NEG_INFINITY, f32::INFINITY),
            (-100.0, f32::INFINITY),
            (f32::NAN, f32::NAN),
        ],
    );
    check_specials(
        UnaryOp::Asinh,
        &[(0.0f64, 0.0), (-0.0, -0.0), (f64::INFINITY, f64::INFINITY), (f64::NAN, f64::NAN)],
    );
    check_specials(
        UnaryOp::Acosh,
        &[(1.0f64, 0.0), (0.5, f64::NAN), (-3.0, f64::NAN), (f64::INFINITY, f64::INFINITY)],
    );
    check_specials(UnaryOp::Acosh, &[(1.0f32, 0.0), (0.0, f32::NAN)]);
}

#[test]
fn test_atanh_poles() {
    check_specials(
        UnaryOp::Atanh,
        &[
            (1.0f64, f64::INFINITY),
            (-1.0, f64::NEG_INFINITY),
            (1.5, f64::NAN),
            (-2.0, f64::NAN),
            (0.0, 0.0),
            (-0.0, -0.0),
            (f64::NAN, f64::NAN),
        ],
    );
    check_specials(UnaryOp::Atanh, &[(1.0f32, f32::INFINITY), (-1.0, f32::NEG_INFINITY), (2.0, f32::NAN)]);
}
