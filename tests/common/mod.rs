//! Shared helpers for the accuracy suites.
//!
//! Every vector result is compared with [`simdly_math::reference`] evaluated
//! in double precision, on every dispatch level this machine supports.

#![allow(dead_code)]

use std::fmt::LowerExp;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simdly_math::{reference, BinaryOp, DispatchLevel, Dispatcher, NativeFloat, UnaryOp};

pub const SEED: u64 = 12345;
pub const SAMPLES: usize = 1000;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

pub fn uniform_f32(rng: &mut StdRng, n: usize, lo: f32, hi: f32) -> Vec<f32> {
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

pub fn uniform_f64(rng: &mut StdRng, n: usize, lo: f64, hi: f64) -> Vec<f64> {
    (0..n).map(|_| rng.random_range(lo..hi)).collect()
}

/// Magnitudes spread evenly over the decades `[10^lo_exp, 10^hi_exp)`,
/// with random signs.
pub fn decades_f64(rng: &mut StdRng, n: usize, lo_exp: f64, hi_exp: f64) -> Vec<f64> {
    (0..n)
        .map(|_| {
            let magnitude = 10f64.powf(rng.random_range(lo_exp..hi_exp));
            if rng.random_bool(0.5) { magnitude } else { -magnitude }
        })
        .collect()
}

pub fn decades_f32(rng: &mut StdRng, n: usize, lo_exp: f32, hi_exp: f32) -> Vec<f32> {
    decades_f64(rng, n, lo_exp as f64, hi_exp as f64)
        .into_iter()
        .map(|x| x as f32)
        .collect()
}

/// Every dispatcher this machine can run, narrowest first.
pub fn dispatchers() -> Vec<Dispatcher> {
    DispatchLevel::available()
        .into_iter()
        .filter_map(|level| Dispatcher::for_level(level).ok())
        .collect()
}

/// A result passes when it is within `abs` or within `rel·|want|`.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    pub rel: f64,
    pub abs: f64,
}

impl Tolerance {
    pub const fn new(rel: f64, abs: f64) -> Self {
        Self { rel, abs }
    }
}

/// NaN must match NaN and infinities must match exactly; finite values
/// within `tol`.
pub fn agrees(got: f64, want: f64, tol: Tolerance) -> bool {
    if want.is_nan() {
        return got.is_nan();
    }
    if want.is_infinite() {
        return got == want;
    }
    let err = (got - want).abs();
    err <= tol.abs || err <= tol.rel * want.abs()
}

/// Compares `op` on `inputs` against the double-precision reference on
/// every dispatch level.
pub fn check_unary<T>(op: UnaryOp, inputs: &[T], tol: Tolerance)
where
    T: NativeFloat + Into<f64> + LowerExp,
{
    for d in dispatchers() {
        let mut out = inputs.to_vec();
        d.unary(op, inputs, &mut out);
        for (&x, &y) in inputs.iter().zip(&out) {
            let want = reference::unary(op, x.into());
            assert!(
                agrees(y.into(), want, tol),
                "{op}({x:e}) at {}: got {y:e}, want {want:e}",
                d.level()
            );
        }
    }
}

/// Two-input version of [`check_unary`].
pub fn check_binary<T>(op: BinaryOp, a: &[T], b: &[T], tol: Tolerance)
where
    T: NativeFloat + Into<f64> + LowerExp,
{
    for d in dispatchers() {
        let mut out = a.to_vec();
        d.binary(op, a, b, &mut out);
        for ((&x, &y), &z) in a.iter().zip(b).zip(&out) {
            let want = reference::binary(op, x.into(), y.into());
            assert!(
                agrees(z.into(), want, tol),
                "{op}({x:e}, {y:e}) at {}: got {z:e}, want {want:e}",
                d.level()
            );
        }
    }
}

/// Runs `op` on every level and returns the results in level order.
pub fn run_unary<T: NativeFloat>(op: UnaryOp, inputs: &[T]) -> Vec<(DispatchLevel, Vec<T>)> {
    dispatchers()
        .into_iter()
        .map(|d| {
            let mut out = inputs.to_vec();
            d.unary(op, inputs, &mut out);
            (d.level(), out)
        })
        .collect()
}

/// Asserts that `op` is non-decreasing on sorted inputs at every level.
pub fn check_monotonic<T>(op: UnaryOp, mut inputs: Vec<T>)
where
    T: NativeFloat + LowerExp,
{
    inputs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for (level, out) in run_unary(op, &inputs) {
        for (i, pair) in out.windows(2).enumerate() {
            assert!(
                pair[0] <= pair[1],
                "{op} not monotonic at {level}: f({:e}) = {:e} > f({:e}) = {:e}",
                inputs[i],
                pair[0],
                inputs[i + 1],
                pair[1]
            );
        }
    }
}

/// Exact special-value table: each `(input, expected)` must match bit for
/// bit category (NaN, signed infinity, signed zero, or the exact value).
pub fn check_specials<T>(op: UnaryOp, cases: &[(T, T)])
where
    T: NativeFloat + LowerExp,
{
    let inputs: Vec<T> = cases.iter().map(|&(x, _)| x).collect();
    for (level, out) in run_unary(op, &inputs) {
        for (&(x, want), &got) in cases.iter().zip(&out) {
            let same = if want.is_nan() {
                got.is_nan()
            } else {
                got == want && got.is_sign_negative() == want.is_sign_negative()
            };
            assert!(same, "{op}({x:e}) at {level}: got {got:e}, want {want:e}");
        }
    }
}
