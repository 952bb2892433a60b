//! Two-argument kernels.

use crate::simd::{SimdFloat, SimdMask};

use super::{exp, log};

/// `x^y`.
///
/// The magnitude is `exp(y·ln|x|)`; signs and the IEEE special cases are
/// patched on afterwards:
///
/// - a negative base raised to an odd integer is negated (`(−0)^3 = −0`);
/// - a finite negative base with a non-integer exponent is NaN;
/// - NaN in either input is NaN, except `1^y = 1`, `x^0 = 1` and
///   `(−1)^±∞ = 1`.
#[inline(always)]
pub fn pow<V: SimdFloat>(x: V, y: V) -> V {
    let one = V::constant(1.0);
    let half = V::constant(0.5);
    let ax = x.abs();
    let inf = splat!(V::INFINITY);

    let r = exp(y * log(ax));

    let is_int = y.floor().cmp_eq(y);
    let hy = y * half;
    let odd = is_int.and_not(hy.floor().cmp_eq(hy));
    let r = V::select(odd.and(x.is_sign_negative()), -r, r);

    let fractional_of_negative = x
        .cmp_lt(V::constant(0.0))
        .and(ax.cmp_lt(inf))
        .and_not(is_int);
    let r = V::select(fractional_of_negative, splat!(V::NAN), r);
    let r = V::select(x.is_nan().or(y.is_nan()), splat!(V::NAN), r);

    let r = V::select(ax.cmp_eq(one).and(y.abs().cmp_eq(inf)), one, r);
    let r = V::select(x.cmp_eq(one), one, r);
    V::select(y.cmp_eq(V::constant(0.0)), one, r)
}

/// `√(x² + y²)` without intermediate overflow or underflow.
///
/// `hypot(±∞, NaN) = +∞`.
#[inline(always)]
pub fn hypot<V: SimdFloat>(x: V, y: V) -> V {
    let zero = V::constant(0.0);
    let ax = x.abs();
    let ay = y.abs();

    let a = ax.max(ay);
    let b = ax.min(ay);
    let q = b / a;
    let h = a * q.mul_add(q, V::constant(1.0)).sqrt();

    let h = V::select(a.cmp_eq(zero), zero, h);
    let h = V::select(x.is_nan().or(y.is_nan()), splat!(V::NAN), h);
    V::select(x.is_infinite().or(y.is_infinite()), splat!(V::INFINITY), h)
}
