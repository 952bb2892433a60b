//! Activation functions composed from the lower-level kernels.
//!
//! Everything here stays in registers: `tanh` is two multiplies around
//! `sigmoid`, which is one `exp` and a division.

use crate::simd::SimdFloat;

use super::{erf, exp};

/// Logistic function `1/(1 + e^−x)`.
///
/// The input is clamped to `[SIGMOID_LO, SIGMOID_HI]` to keep `exp` finite,
/// then lanes outside the clamp are set to exactly `0` or `1`.
#[inline(always)]
pub fn sigmoid<V: SimdFloat>(x: V) -> V {
    let one = V::constant(1.0);
    let lo = splat!(V::SIGMOID_LO);
    let hi = splat!(V::SIGMOID_HI);

    let clamped = x.max(lo).min(hi);
    let y = one / (one + exp(-clamped));

    let y = V::select(x.cmp_ge(hi), one, y);
    let y = V::select(x.cmp_le(lo), V::constant(0.0), y);
    V::select(x.is_nan(), x, y)
}

/// Hyperbolic tangent as `2·sigmoid(2|x|) − 1` with the sign of `x`.
///
/// Returns `x` itself below `TANH_LINEAR` and exactly `±1` from
/// `TANH_SATURATION` on.
#[inline(always)]
pub fn tanh<V: SimdFloat>(x: V) -> V {
    let one = V::constant(1.0);
    let two = V::constant(2.0);
    let ax = x.abs();

    let y = sigmoid(ax * two).mul_add(two, -one);

    let y = V::select(ax.cmp_ge(splat!(V::TANH_SATURATION)), one, y).copysign(x);
    let y = V::select(ax.cmp_lt(splat!(V::TANH_LINEAR)), x, y);
    V::select(x.is_nan(), x, y)
}

/// Sigmoid-weighted linear unit `x·sigmoid(x)`. `silu(−∞) = −0`.
#[inline(always)]
pub fn silu<V: SimdFloat>(x: V) -> V {
    let y = x * sigmoid(x);
    V::select(x.cmp_eq(splat!(V::NEG_INFINITY)), V::constant(-0.0), y)
}

/// Gaussian error linear unit `x·½·(1 + erf(x/√2))`. `gelu(−∞) = −0`.
#[inline(always)]
pub fn gelu<V: SimdFloat>(x: V) -> V {
    let half = V::constant(0.5);
    let y = x * half * (V::constant(1.0) + erf(x * splat!(V::FRAC_1_SQRT_2)));
    V::select(x.cmp_eq(splat!(V::NEG_INFINITY)), V::constant(-0.0), y)
}

/// Softmax across the lanes of one register.
///
/// Subtracts the register maximum before exponentiating so the largest
/// lane maps to `exp(0) = 1`.
#[inline(always)]
pub fn softmax_lanes<V: SimdFloat>(x: V) -> V {
    let shifted = exp(x - V::splat(x.reduce_max()));
    shifted / V::splat(shifted.reduce_sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_saturates_exactly() {
        assert_eq!(sigmoid(0.0f32), 0.5);
        assert_eq!(sigmoid(0.0f64), 0.5);
        assert_eq!(sigmoid(25.0f32), 1.0);
        assert_eq!(sigmoid(-90.0f32), 0.0);
        assert_eq!(sigmoid(f64::INFINITY), 1.0);
        assert_eq!(sigmoid(f64::NEG_INFINITY), 0.0);
        assert!(sigmoid(f32::NAN).is_nan());
        let s = sigmoid(-86.0f32);
        assert!(s > 0.0 && s < 1e-37);
    }

    #[test]
    fn tanh_bounds() {
        assert_eq!(tanh(9.0f32), 1.0);
        assert_eq!(tanh(-19.5f64), -1.0);
        assert_eq!(tanh(1e-9f64), 1e-9);
        assert_eq!(tanh(-0.0f32).to_bits(), (-0.0f32).to_bits());
        for x in [0.1f64, 0.5, 1.0, 2.0, 4.0] {
            let t = tanh(x);
            assert!(t < 1.0 && (t - x.tanh()).abs() < 4e-15, "tanh({x})");
            assert_eq!(tanh(-x), -t);
        }
    }

    #[test]
    fn gated_units() {
        assert_eq!(silu(0.0f32), 0.0);
        assert_eq!(silu(f64::NEG_INFINITY), 0.0);
        assert_eq!(gelu(f32::NEG_INFINITY), 0.0);
        assert_eq!(gelu(f64::INFINITY), f64::INFINITY);
        assert!((silu(1.0f64) - 1.0 / (1.0 + (-1.0f64).exp())).abs() < 1e-15);
        assert!((gelu(1.0f64) - 0.8413447460685429).abs() < 2e-7);
    }

    #[test]
    fn single_lane_softmax_is_one() {
        assert_eq!(softmax_lanes(123.0f32), 1.0);
        assert_eq!(softmax_lanes(-5.0f64), 1.0);
    }
}
