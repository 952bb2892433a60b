//! Half-precision inputs are computed in `f32` and rounded back.

mod common;

use common::{rng, uniform_f32};
use half::{bf16, f16};
use simdly_math::{dispatcher, BinaryOp, Element, UnaryOp};

#[test]
fn test_f16_matches_rounded_f32() {
    let mut rng = rng();
    let wide = uniform_f32(&mut rng, 1000, -0.95, 4.0);
    let narrow: Vec<f16> = wide.iter().map(|&v| f16::from_f32(v)).collect();
    let promoted: Vec<f32> = narrow.iter().map(|v| v.to_f32()).collect();

    for op in UnaryOp::ALL {
        let mut expected = vec![0.0f32; promoted.len()];
        dispatcher().unary(op, &promoted, &mut expected);

        let mut got = vec![f16::ZERO; narrow.len()];
        <f16 as Element>::unary(dispatcher(), op, &narrow, &mut got);
        for (i, (g, e)) in got.iter().zip(&expected).enumerate() {
            let want = f16::from_f32(*e);
            let same = g.to_bits() == want.to_bits() || (g.is_nan() && want.is_nan());
            assert!(same, "{op}({}) in f16: got {g}, want {want}", narrow[i]);
        }
    }
}

#[test]
fn test_bf16_matches_rounded_f32() {
    let mut rng = rng();
    let wide = uniform_f32(&mut rng, 777, 0.05, 0.95);
    let a: Vec<bf16> = wide.iter().map(|&v| bf16::from_f32(v)).collect();
    let b: Vec<bf16> = wide.iter().rev().map(|&v| bf16::from_f32(v * 3.0)).collect();

    let mut got = vec![bf16::ZERO; a.len()];
    simdly_math::pow(&a, &b, &mut got);

    let fa: Vec<f32> = a.iter().map(|v| v.to_f32()).collect();
    let fb: Vec<f32> = b.iter().map(|v| v.to_f32()).collect();
    let mut expected = vec![0.0f32; fa.len()];
    dispatcher().binary(BinaryOp::Pow, &fa, &fb, &mut expected);

    for (g, e) in got.iter().zip(&expected) {
        assert_eq!(g.to_bits(), bf16::from_f32(*e).to_bits());
    }
}

#[test]
fn test_half_in_place_over_chunk_boundaries() {
    let mut data: Vec<f16> = (0..1000).map(|i| f16::from_f32(i as f32 / 1000.0)).collect();
    let before = data.clone();
    simdly_math::sigmoid_inplace(&mut data);
    for (x, y) in before.iter().zip(&data) {
        let want = 1.0 / (1.0 + (-x.to_f32()).exp());
        assert!((y.to_f32() - want).abs() < 1e-3, "sigmoid({x}) = {y}");
    }

    let mut a: Vec<bf16> = vec![bf16::from_f32(3.0); 600];
    let b: Vec<bf16> = vec![bf16::from_f32(4.0); 600];
    simdly_math::hypot_inplace(&mut a, &b);
    assert!(a.iter().all(|v| v.to_f32() == 5.0));
}

#[test]
fn test_half_special_values_survive() {
    let input = [f16::NAN, f16::INFINITY, f16::NEG_INFINITY, f16::ZERO, f16::from_f32(-2.0)];
    let mut out = [f16::ZERO; 5];
    simdly_math::log(&input, &mut out);
    assert!(out[0].is_nan());
    assert_eq!(out[1], f16::INFINITY);
    assert!(out[2].is_nan());
    assert_eq!(out[3], f16::NEG_INFINITY);
    assert!(out[4].is_nan());

    let mut big = [f16::from_f32(20.0)];
    simdly_math::exp_inplace(&mut big);
    assert_eq!(big[0], f16::INFINITY);
}
