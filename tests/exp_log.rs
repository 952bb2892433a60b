//! Accuracy and special values of the exponential and logarithm families.

mod common;

use common::{check_monotonic, check_specials, check_unary, rng, uniform_f32, uniform_f64, Tolerance, SAMPLES};
use simdly_math::{Dispatcher, UnaryOp};

const F32_TOL: Tolerance = Tolerance::new(1e-5, 1e-30);
const F64_TOL: Tolerance = Tolerance::new(1e-12, 1e-300);

#[test]
fn test_exp_precision_across_tiers() {
    let mut rng = rng();
    check_unary(UnaryOp::Exp, &uniform_f32(&mut rng, SAMPLES, -87.0, 88.0), F32_TOL);
    check_unary(UnaryOp::Exp, &uniform_f64(&mut rng, SAMPLES, -700.0, 700.0), F64_TOL);
    check_unary(UnaryOp::Exp, &uniform_f64(&mut rng, SAMPLES, -1.0, 1.0), F64_TOL);

    check_unary(UnaryOp::Exp2, &uniform_f32(&mut rng, SAMPLES, -125.0, 127.0), F32_TOL);
    check_unary(UnaryOp::Exp2, &uniform_f64(&mut rng, SAMPLES, -1000.0, 1000.0), F64_TOL);
}

#[test]
fn test_log_precision_across_tiers() {
    let mut rng = rng();
    for op in [UnaryOp::Log, UnaryOp::Log2, UnaryOp::Log10] {
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, 1e-30, 1e30), F32_TOL);
        check_unary(op, &uniform_f32(&mut rng, SAMPLES, 0.5, 2.0), Tolerance::new(1e-5, 1e-7));
        check_unary(op, &uniform_f64(&mut rng, SAMPLES, 1e-300, 1e300), F64_TOL);
        check_unary(op, &uniform_f64(&mut rng, SAMPLES, 0.5, 2.0), Tolerance::new(1e-12, 1e-15));
        println!("{op}: ok");
    }
}

#[test]
fn test_log1p_precision_near_zero() {
    let mut rng = rng();
    check_unary(UnaryOp::Log1p, &uniform_f32(&mut rng, SAMPLES, -1e-3, 1e-3), F32_TOL);
    check_unary(UnaryOp::Log1p, &uniform_f32(&mut rng, SAMPLES, -0.99, 1e6), F32_TOL);
    check_unary(UnaryOp::Log1p, &uniform_f64(&mut rng, SAMPLES, -1e-8, 1e-8), F64_TOL);
    check_unary(UnaryOp::Log1p, &uniform_f64(&mut rng, SAMPLES, -0.99, 1e12), F64_TOL);
}

#[test]
fn test_exp_special_values() {
    check_specials(
        UnaryOp::Exp,
        &[
            (0.0f32, 1.0),
            (-0.0, 1.0),
            (f32::INFINITY, f32::INFINITY),
            (f32::NEG_INFINITY, 0.0),
            (f32::NAN, f32::NAN),
            (100.0, f32::INFINITY),
            (-110.0, 0.0),
        ],
    );
    check_specials(
        UnaryOp::Exp,
        &[
            (0.0f64, 1.0),
            (f64::INFINITY, f64::INFINITY),
            (f64::NEG_INFINITY, 0.0),
            (f64::NAN, f64::NAN),
            (710.0, f64::INFINITY),
            (-750.0, 0.0),
        ],
    );
    check_specials(UnaryOp::Exp2, &[(0.0f64, 1.0), (10.0, 1024.0), (-1.0, 0.5), (1024.0, f64::INFINITY)]);
    check_specials(UnaryOp::Exp2, &[(3.0f32, 8.0), (128.0, f32::INFINITY), (-200.0, 0.0)]);
}

#[test]
fn test_exp_of_small_vector() {
    let d = Dispatcher::detect();
    let input = [0.0f64, 1.0, -1.0];
    let mut output = [0.0f64; 3];
    d.unary(UnaryOp::Exp, &input, &mut output);
    println!("{}: exp({input:?}) = {output:?}", d.level());
    assert_eq!(output[0], 1.0);
    assert!((output[1] - std::f64::consts::E).abs() < 1e-15);
    assert!((output[2] - 1.0 / std::f64::consts::E).abs() < 1e-16);
}

#[test]
fn test_log_special_values() {
    for op in [UnaryOp::Log, UnaryOp::Log2, UnaryOp::Log10] {
        check_specials(
            op,
            &[
                (1.0f32, 0.0),
                (0.0, f32::NEG_INFINITY),
                (-0.0, f32::NEG_INFINITY),
                (-1.0, f32::NAN),
                (f32::NEG_INFINITY, f32::NAN),
                (f32::INFINITY, f32::INFINITY),
                (f32::NAN, f32::NAN),
            ],
        );
        check_specials(
            op,
            &[
                (1.0f64, 0.0),
                (0.0, f64::NEG_INFINITY),
                (-2.5, f64::NAN),
                (f64::INFINITY, f64::INFINITY),
                (f64::NAN, f64::NAN),
            ],
        );
    }
    check_specials(UnaryOp::Log2, &[(8.0f64, 3.0), (0.25, -2.0)]);
    check_specials(UnaryOp::Log2, &[(1024.0f32, 10.0)]);
}

#[test]
fn test_log_of_subnormals() {
    check_unary(UnaryOp::Log, &[1e-310f64, 4.9e-324, 2.2e-308], F64_TOL);
    check_unary(UnaryOp::Log, &[1e-40f32, 1.4e-45, 1.1e-38], F32_TOL);
}

#[test]
fn test_log1p_special_values() {
    check_specials(
        UnaryOp::Log1p,
        &[
            (0.0f64, 0.0),
            (-0.0, -0.0),
            (-1.0, f64::NEG_INFINITY),
            (-2.0, f64::NAN),
            (f64::INFINITY, f64::INFINITY),
            (f64::NAN, f64::NAN),
        ],
    );
    check_specials(UnaryOp::Log1p, &[(-1.0f32, f32::NEG_INFINITY), (-2.0, f32::NAN), (0.0, 0.0)]);
}

#[test]
fn test_exp_log_round_trip() {
    let mut rng = rng();
    let d = Dispatcher::detect();

    let x = uniform_f64(&mut rng, SAMPLES, 1e-5, 1e5);
    let mut y = vec![0.0; x.len()];
    d.unary(UnaryOp::Log, &x, &mut y);
    d.unary_inplace(UnaryOp::Exp, &mut y);
    for (a, b) in x.iter().zip(&y) {
        assert!((a - b).abs() <= 1e-12 * a, "exp(log({a})) = {b}");
    }

    let x = uniform_f32(&mut rng, SAMPLES, 1e-3, 1e3);
    let mut y = vec![0.0; x.len()];
    d.unary(UnaryOp::Log, &x, &mut y);
    d.unary_inplace(UnaryOp::Exp, &mut y);
    for (a, b) in x.iter().zip(&y) {
        assert!((a - b).abs() <= 1e-5 * a, "exp(log({a})) = {b}");
    }
}

#[test]
fn test_exp_and_log_are_monotonic() {
    let mut rng = rng();
    check_monotonic(UnaryOp::Exp, uniform_f64(&mut rng, SAMPLES, -20.0, 20.0));
    check_monotonic(UnaryOp::Exp, uniform_f32(&mut rng, SAMPLES, -20.0, 20.0));
    check_monotonic(UnaryOp::Log, uniform_f64(&mut rng, SAMPLES, 1e-3, 1e3));
    check_monotonic(UnaryOp::Log, uniform_f32(&mut rng, SAMPLES, 1e-3, 1e3));
}
