use crate::simd::SimdFloat;

use super::horner;

/// Splits a positive `x` into `(e, ln m)` with `x = 2^e·m` and
/// `m ∈ (√2/2, √2]`.
///
/// Subnormal lanes are lifted by `2^MANTISSA_BITS` first. Non-positive,
/// infinite and NaN lanes produce garbage that the callers overwrite.
#[inline(always)]
pub(crate) fn log_reduce<V: SimdFloat>(x: V) -> (V, V) {
    let one = V::constant(1.0);

    let tiny = x.cmp_lt(splat!(V::MIN_POSITIVE));
    let scaled = V::select(tiny, x * splat!(V::SUBNORMAL_SCALE), x);
    let (e, m) = scaled.decompose();
    let e = V::select(tiny, e - splat!(V::MANTISSA_BITS), e);

    let above = m.cmp_gt(splat!(V::SQRT_2));
    let m = V::select(above, m * V::constant(0.5), m);
    let e = V::select(above, e + one, e);

    // ln m = 2·atanh(y) with y = (m − 1)/(m + 1), |y| < 0.172
    let y = (m - one) / (m + one);
    (e, y * horner(y * y, cst!(V::LOG_POLY)))
}

/// `e·ln2 + ln m`, with `e·ln2` split so the large part is exact.
#[inline(always)]
pub(crate) fn ln_from_parts<V: SimdFloat>(e: V, log_m: V) -> V {
    e.mul_add(splat!(V::LN2_HI), e.mul_add(splat!(V::LN2_LO), log_m))
}

/// Logarithm special values, applied in order: `x < 0 → NaN`, `0 → −∞`,
/// `+∞ → +∞`, NaN passes through.
#[inline(always)]
fn log_specials<V: SimdFloat>(x: V, y: V) -> V {
    let zero = V::constant(0.0);
    let y = V::select(x.cmp_lt(zero), splat!(V::NAN), y);
    let y = V::select(x.cmp_eq(zero), splat!(V::NEG_INFINITY), y);
    let y = V::select(x.cmp_eq(splat!(V::INFINITY)), x, y);
    V::select(x.is_nan(), x, y)
}

/// Natural logarithm.
#[inline(always)]
pub fn log<V: SimdFloat>(x: V) -> V {
    let (e, log_m) = log_reduce(x);
    log_specials(x, ln_from_parts(e, log_m))
}

/// Base-2 logarithm.
#[inline(always)]
pub fn log2<V: SimdFloat>(x: V) -> V {
    let (e, log_m) = log_reduce(x);
    log_specials(x, log_m.mul_add(splat!(V::LOG2_E), e))
}

/// Base-10 logarithm.
#[inline(always)]
pub fn log10<V: SimdFloat>(x: V) -> V {
    let (e, log_m) = log_reduce(x);
    log_specials(x, e.mul_add(splat!(V::LOG10_2), log_m * splat!(V::LOG10_E)))
}

/// `ln(1 + x)`, accurate for small `x`.
///
/// Computes `ln(u)·x/(u − 1)` with `u = 1 + x`, which cancels the rounding
/// error committed when forming `u`.
#[inline(always)]
pub fn log1p<V: SimdFloat>(x: V) -> V {
    let one = V::constant(1.0);
    let u = x + one;
    let d = u - one;

    let (e, log_m) = log_reduce(u);
    let y = ln_from_parts(e, log_m) * (x / d);
    let y = V::select(d.cmp_eq(V::constant(0.0)), x, y);

    // u < 0 ⇔ x < −1, u == 0 ⇔ x == −1
    let y = log_specials(u, y);
    V::select(x.is_nan(), x, y)
}
