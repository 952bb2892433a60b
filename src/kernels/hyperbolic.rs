//! Hyperbolic functions and their inverses, built on `exp`, `log` and
//! `log1p`.

use crate::simd::{SimdFloat, SimdMask};

use super::{exp, horner, log, log1p};

/// `½·e^|x|`, formed as `e·(e/2)` with `e = exp(|x|/2)` so it stays finite
/// for every `|x|` whose `cosh` is finite.
#[inline(always)]
fn half_exp<V: SimdFloat>(x: V) -> V {
    let half = V::constant(0.5);
    let e = exp(x.abs() * half);
    e * (e * half)
}

/// Hyperbolic sine.
///
/// Taylor series below `|x| = 1`, `h − 1/(4h)` with `h = ½·e^|x|` above.
#[inline(always)]
pub fn sinh<V: SimdFloat>(x: V) -> V {
    let h = half_exp(x);
    let large = (h - V::constant(0.25) / h).copysign(x);
    let series = x * horner(x * x, cst!(V::SINH_POLY));
    let y = V::select(x.abs().cmp_lt(V::constant(1.0)), series, large);
    V::select(x.is_nan(), x, y)
}

/// Hyperbolic cosine. `cosh(0) = 1`, `cosh(±∞) = +∞`.
#[inline(always)]
pub fn cosh<V: SimdFloat>(x: V) -> V {
    let h = half_exp(x);
    let y = h + V::constant(0.25) / h;
    V::select(x.is_nan(), x, y)
}

/// Inverse hyperbolic sine.
///
/// `log1p(|x| + x²/(1 + √(1+x²)))` keeps full precision near zero; beyond
/// `ASINH_LARGE` the `1 + x²` term is dropped and `ln 2x` is used instead.
#[inline(always)]
pub fn asinh<V: SimdFloat>(x: V) -> V {
    let one = V::constant(1.0);
    let ax = x.abs();
    let x2 = x * x;

    let near = log1p(ax + x2 / (one + (one + x2).sqrt()));
    let far = log(ax) + splat!(V::LN2);
    let y = V::select(ax.cmp_gt(splat!(V::ASINH_LARGE)), far, near);
    V::select(x.is_nan(), x, y.copysign(x))
}

/// Inverse hyperbolic cosine. `acosh(1) = 0`, `x < 1 → NaN`.
#[inline(always)]
pub fn acosh<V: SimdFloat>(x: V) -> V {
    let one = V::constant(1.0);
    let xm1 = x - one;

    let near = log1p(xm1 + (xm1 * (x + one)).sqrt());
    let far = log(x) + splat!(V::LN2);
    let y = V::select(x.cmp_gt(splat!(V::ASINH_LARGE)), far, near);
    let y = V::select(x.cmp_lt(one), splat!(V::NAN), y);
    V::select(x.is_nan(), x, y)
}

/// Inverse hyperbolic tangent. `atanh(±1) = ±∞`, `|x| > 1 → NaN`.
#[inline(always)]
pub fn atanh<V: SimdFloat>(x: V) -> V {
    let one = V::constant(1.0);
    let ax = x.abs();

    let y = log1p((ax + ax) / (one - ax)) * V::constant(0.5);
    let y = V::select(ax.cmp_eq(one), splat!(V::INFINITY), y).copysign(x);
    V::select(x.is_nan().or(ax.cmp_gt(one)), splat!(V::NAN), y)
}
