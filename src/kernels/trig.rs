use crate::simd::{SimdFloat, SimdMask};

use super::horner;

/// Cody–Waite reduction for `|x| ≤ TRIG_WIDE`: `(k, r)` with
/// `x = k·π/2 + r`.
///
/// `k·PIO2_HI`, `k·PIO2_MID` and `k·PIO2_LO` are exact in this range, so
/// tiers with and without fused multiply-add agree up to the last step.
#[inline(always)]
fn reduce_cody_waite<V: SimdFloat>(x: V) -> (V, V) {
    let k = (x * splat!(V::FRAC_2_PI)).round();
    let r = (-k).mul_add(splat!(V::PIO2_HI), x);
    let r = (-k).mul_add(splat!(V::PIO2_MID), r);
    let r = (-k).mul_add(splat!(V::PIO2_LO), r);
    let r = (-k).mul_add(splat!(V::PIO2_TAIL), r);
    (k, r)
}

/// `a + b` as the unevaluated pair `(sum, rounding error)`.
#[inline(always)]
fn two_sum<V: SimdFloat>(a: V, b: V) -> (V, V) {
    let s = a + b;
    let bb = s - a;
    (s, (a - (s - bb)) + (b - bb))
}

/// `v − 4·round(v/4)`, exact, in `[−2, 2]`.
#[inline(always)]
fn rem4<V: SimdFloat>(v: V) -> V {
    v - (v * V::constant(0.25)).round() * V::constant(4.0)
}

/// Reduction for finite `|x| > TRIG_WIDE`.
///
/// `|x|·2/π mod 4` is accumulated from exact products of the two Veltkamp
/// halves of `|x|` with the chunks of `2/π`. Every product is reduced
/// mod 4 on its own, so the integer bits far above the binary point never
/// reach the sum. Only unfused IEEE operations are used and every tier
/// produces the same bits.
#[inline(always)]
fn reduce_wide<V: SimdFloat>(x: V) -> (V, V) {
    let a = x.abs() * splat!(V::TRIG_WIDE_SCALE);
    let c = a * splat!(V::SPLITTER);
    let a_hi = c - (c - a);
    let a_lo = a - a_hi;

    let mut hi = V::constant(0.0);
    let mut lo = V::constant(0.0);
    for &chunk in cst!(V::FRAC_2_PI_CHUNKS) {
        let chunk = V::splat(chunk);
        for half in [a_hi, a_lo] {
            let (s, e) = two_sum(hi, rem4(half * chunk));
            hi = rem4(s);
            lo = lo + e;
        }
    }

    let k = hi.round();
    let (t_hi, t_lo) = two_sum(hi - k, lo);
    let pio2 = splat!(V::FRAC_PI_2);
    let r = t_hi * pio2 + (t_hi * splat!(V::FRAC_PI_2_LO) + t_lo * pio2);

    let negative = x.cmp_lt(V::constant(0.0));
    (V::select(negative, -k, k), V::select(negative, -r, r))
}

/// Reduces `x` by multiples of `π/2` and evaluates both polynomials on the
/// remainder. Returns `(k, sin r, cos r)` with `x = k·π/2 + r`.
#[inline(always)]
fn reduce<V: SimdFloat>(x: V) -> (V, V, V) {
    let (k, r) = reduce_cody_waite(x);
    let wide = x
        .abs()
        .cmp_gt(splat!(V::TRIG_WIDE))
        .and_not(x.is_infinite());
    let (k, r) = if wide.any() {
        let (k_wide, r_wide) = reduce_wide(x);
        (V::select(wide, k_wide, k), V::select(wide, r_wide, r))
    } else {
        (k, r)
    };

    let z = r * r;
    let s = (r * z).mul_add(horner(z, cst!(V::SIN_POLY)), r);
    let c = (z * z).mul_add(
        horner(z, cst!(V::COS_POLY)),
        z.mul_add(V::constant(-0.5), V::constant(1.0)),
    );
    (k, s, c)
}

/// Lanes where `k` is odd.
#[inline(always)]
fn is_odd<V: SimdFloat>(k: V) -> V::Mask {
    let half = (k * V::constant(0.5)).floor();
    (k - half - half).cmp_eq(V::constant(1.0))
}

/// Picks `±sin r` / `±cos r` for quadrant `k mod 4`.
#[inline(always)]
fn quadrant<V: SimdFloat>(k: V, s: V, c: V) -> V {
    let q = k - (k * V::constant(0.25)).floor() * V::constant(4.0);
    let v = V::select(is_odd(k), c, s);
    V::select(q.cmp_ge(V::constant(2.0)), -v, v)
}

/// `±∞ → NaN`; NaN passes through.
#[inline(always)]
fn trig_specials<V: SimdFloat>(x: V, y: V) -> V {
    let y = V::select(x.is_infinite(), splat!(V::NAN), y);
    V::select(x.is_nan(), x, y)
}

/// Sine.
#[inline(always)]
pub fn sin<V: SimdFloat>(x: V) -> V {
    let (k, s, c) = reduce(x);
    let y = quadrant(k, s, c);
    // keeps the sign of ±0
    let y = V::select(x.cmp_eq(V::constant(0.0)), x, y);
    trig_specials(x, y)
}

/// Cosine.
#[inline(always)]
pub fn cos<V: SimdFloat>(x: V) -> V {
    let (k, s, c) = reduce(x);
    trig_specials(x, quadrant(k + V::constant(1.0), s, c))
}

/// Tangent, from the same reduction: `s/c` for even `k`, `−c/s` for odd.
#[inline(always)]
pub fn tan<V: SimdFloat>(x: V) -> V {
    let (k, s, c) = reduce(x);
    let y = V::select(is_odd(k), -c / s, s / c);
    let zero = x.cmp_eq(V::constant(0.0));
    let y = V::select(zero.or(x.is_nan()), x, y);
    trig_specials(x, y)
}
