use crate::simd::SimdFloat;

use super::horner;

/// `y·2^k` for integral `k`, applied in two halves so that neither factor
/// leaves the normal exponent range when the result is near overflow or
/// subnormal.
#[inline(always)]
pub(crate) fn scale_by_pow2<V: SimdFloat>(y: V, k: V) -> V {
    let k1 = (k * V::constant(0.5)).floor();
    let k2 = k - k1;
    y * k1.pow2i() * k2.pow2i()
}

/// Reduced exponential core: `exp(r)` for `|r| ≤ ln2/2`.
#[inline(always)]
fn exp_reduced<V: SimdFloat>(r: V) -> V {
    horner(r, cst!(V::EXP_POLY))
}

#[inline(always)]
fn saturate<V: SimdFloat>(x: V, y: V, overflow: V::Mask, underflow: V::Mask) -> V {
    let y = V::select(overflow, splat!(V::INFINITY), y);
    let y = V::select(underflow, V::constant(0.0), y);
    V::select(x.is_nan(), x, y)
}

/// Natural exponential.
///
/// `k = round(x·log2 e)`, `r = x − k·ln2` with a two-part `ln2`, then
/// `exp(r)` by polynomial and `2^k` through the exponent field.
#[inline(always)]
pub fn exp<V: SimdFloat>(x: V) -> V {
    let k = (x * splat!(V::LOG2_E)).round();
    let r = (-k).mul_add(splat!(V::LN2_HI), x);
    let r = (-k).mul_add(splat!(V::LN2_LO), r);
    let y = scale_by_pow2(exp_reduced(r), k);

    saturate(
        x,
        y,
        x.cmp_gt(splat!(V::EXP_OVERFLOW)),
        x.cmp_lt(splat!(V::EXP_UNDERFLOW)),
    )
}

/// Base-2 exponential.
#[inline(always)]
pub fn exp2<V: SimdFloat>(x: V) -> V {
    let k = x.round();
    let r = (x - k) * splat!(V::LN2);
    let y = scale_by_pow2(exp_reduced(r), k);

    saturate(
        x,
        y,
        x.cmp_ge(splat!(V::EXP2_OVERFLOW)),
        x.cmp_lt(splat!(V::EXP2_UNDERFLOW)),
    )
}
