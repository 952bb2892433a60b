use crate::simd::{SimdFloat, SimdMask};

use super::horner;

/// `atan(t)` for `t ≥ 0` (including `+∞`).
///
/// Folds `t > 1` onto `π/2 − atan(1/t)` and `t > tan(π/8)` onto
/// `π/4 + atan((t−1)/(t+1))`, leaving a polynomial on `[0, tan(π/8)]`.
#[inline(always)]
fn atan_positive<V: SimdFloat>(t: V) -> V {
    let one = V::constant(1.0);

    let big = t.cmp_gt(one);
    let t = V::select(big, one / t, t);
    let mid = t.cmp_gt(splat!(V::TAN_PI_8));
    let u = V::select(mid, (t - one) / (t + one), t);

    let z = u * u;
    let p = (u * z).mul_add(horner(z, cst!(V::ATAN_POLY)), u);
    let a = V::select(mid, p + splat!(V::FRAC_PI_4), p);
    V::select(big, splat!(V::FRAC_PI_2) - a, a)
}

/// `asin(t)` for `t ∈ [0, 1]`, returned as `(folded, p)`.
///
/// For `t < ½` the result is `p` itself. Otherwise `p = asin(√((1−t)/2))`
/// and the result is `π/2 − 2p`; keeping the halves separate lets `acos`
/// avoid the cancellation of `π/2 − asin`.
#[inline(always)]
fn asin_parts<V: SimdFloat>(t: V) -> (V::Mask, V) {
    let half = V::constant(0.5);
    let folded = t.cmp_ge(half);
    let w = V::select(folded, ((V::constant(1.0) - t) * half).sqrt(), t);
    let z = w * w;
    (folded, (w * z).mul_add(horner(z, cst!(V::ASIN_POLY)), w))
}

/// `|x| > 1 → NaN`; NaN passes through.
#[inline(always)]
fn unit_domain<V: SimdFloat>(x: V, y: V) -> V {
    let y = V::select(x.abs().cmp_gt(V::constant(1.0)), splat!(V::NAN), y);
    V::select(x.is_nan(), x, y)
}

/// Arcsine. `asin(±1) = ±π/2`, `|x| > 1 → NaN`.
#[inline(always)]
pub fn asin<V: SimdFloat>(x: V) -> V {
    let (folded, p) = asin_parts(x.abs());
    let a = V::select(folded, splat!(V::FRAC_PI_2) - (p + p), p);
    unit_domain(x, a.copysign(x))
}

/// Arccosine. `acos(1) = 0`, `acos(−1) = π`, `|x| > 1 → NaN`.
#[inline(always)]
pub fn acos<V: SimdFloat>(x: V) -> V {
    let (folded, p) = asin_parts(x.abs());
    let negative = x.cmp_lt(V::constant(0.0));

    let near = V::select(negative, splat!(V::PI) - (p + p), p + p);
    let centre = splat!(V::FRAC_PI_2) - p.copysign(x);
    unit_domain(x, V::select(folded, near, centre))
}

/// Arctangent. `atan(±∞) = ±π/2`.
#[inline(always)]
pub fn atan<V: SimdFloat>(x: V) -> V {
    atan_positive(x.abs()).copysign(x)
}

/// Two-argument arctangent `atan2(y, x)`, the angle of the point `(x, y)`.
///
/// `atan2(±0, +0) = ±0`, `atan2(±0, −0) = ±π`, `atan2(±∞, ±∞)` gives the
/// odd multiples of `π/4`, and NaN in either input gives NaN.
#[inline(always)]
pub fn atan2<V: SimdFloat>(y: V, x: V) -> V {
    let zero = V::constant(0.0);
    let ax = x.abs();
    let ay = y.abs();

    let a = atan_positive(ay / ax);
    let a = V::select(ax.cmp_eq(zero).and(ay.cmp_eq(zero)), zero, a);
    let a = V::select(
        x.is_infinite().and(y.is_infinite()),
        splat!(V::FRAC_PI_4),
        a,
    );
    let a = V::select(x.is_sign_negative(), splat!(V::PI) - a, a);
    let a = a.copysign(y);
    V::select(x.is_nan().or(y.is_nan()), splat!(V::NAN), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn asin_domain() {
        assert_eq!(asin(1.0f64), FRAC_PI_2);
        assert_eq!(asin(-1.0f32), -std::f32::consts::FRAC_PI_2);
        assert!(asin(1.5f32).is_nan());
        assert!(asin(-1.0000001f64).is_nan());
        assert!(asin(f64::NAN).is_nan());
        assert_eq!(asin(0.0f64), 0.0);
    }

    #[test]
    fn acos_endpoints() {
        assert_eq!(acos(1.0f64), 0.0);
        assert!((acos(-1.0f64) - PI).abs() < 1e-15);
        assert!((acos(0.0f64) - FRAC_PI_2).abs() < 1e-15);
        assert!(acos(2.0f32).is_nan());
        let x = 0.999_999f64;
        assert!((acos(x) / x.acos() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn atan_limits() {
        assert_eq!(atan(f64::INFINITY), FRAC_PI_2);
        assert_eq!(atan(f32::NEG_INFINITY), -std::f32::consts::FRAC_PI_2);
        assert!((atan(1.0f64) - FRAC_PI_4).abs() < 1e-16);
        assert!(atan(f32::NAN).is_nan());
    }

    #[test]
    fn atan2_quadrants_and_zeros() {
        assert_eq!(atan2(0.0f64, 0.0), 0.0);
        assert_eq!(atan2(1.0f64, 0.0), FRAC_PI_2);
        assert_eq!(atan2(0.0f64, -0.0), PI);
        assert_eq!(atan2(-0.0f64, -1.0), -PI);
        assert!((atan2(1.0f64, -1.0) - 3.0 * FRAC_PI_4).abs() < 1e-15);
        assert!((atan2(-1.0f64, -1.0) + 3.0 * FRAC_PI_4).abs() < 1e-15);
        assert_eq!(atan2(f64::INFINITY, f64::INFINITY), FRAC_PI_4);
        assert!((atan2(f64::INFINITY, f64::NEG_INFINITY) - 3.0 * FRAC_PI_4).abs() < 1e-15);
        assert!(atan2(f32::NAN, 1.0).is_nan());
        assert!(atan2(1.0, f32::NAN).is_nan());
    }
}
