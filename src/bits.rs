//! Exponent-field manipulation on single values.
//!
//! These helpers build `2^k` and split a float into exponent and mantissa by
//! writing or reading the IEEE-754 exponent field directly. The portable
//! lane type uses the direct integer conversions below. Vector tiers without
//! a 64-bit float/integer conversion (SSE4.1, AVX2) use the magic-number
//! forms instead; the tests at the bottom pin both forms to the same results.

/// `1.5·2^52`. Adding it to an integral `f64` with `|k| < 2^51` leaves `k`
/// in the low mantissa bits.
pub(crate) const F64_ROUND_MAGIC: f64 = 6755399441055744.0;
pub(crate) const F64_ROUND_MAGIC_BITS: u64 = 0x4338_0000_0000_0000;

/// `2^52`. OR-ing an 11-bit integer into its mantissa gives `2^52 + n`.
pub(crate) const F64_TWO_POW_52: f64 = 4503599627370496.0;
pub(crate) const F64_TWO_POW_52_BITS: u64 = 0x4330_0000_0000_0000;

pub(crate) const F32_EXP_BIAS: i32 = 127;
pub(crate) const F64_EXP_BIAS: i64 = 1023;

pub(crate) const F32_MANTISSA_MASK: u32 = 0x007f_ffff;
pub(crate) const F32_ONE_BITS: u32 = 0x3f80_0000;
pub(crate) const F64_MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
pub(crate) const F64_ONE_BITS: u64 = 0x3ff0_0000_0000_0000;

/// `2^k` for integral `k` in `[-126, 127]`; any other `k` (including NaN and
/// infinities) yields an unspecified value.
#[inline(always)]
pub(crate) fn pow2i_f32(k: f32) -> f32 {
    f32::from_bits(((k as i32).wrapping_add(F32_EXP_BIAS) as u32) << 23)
}

/// `2^k` for integral `k` in `[-1022, 1023]`.
#[inline(always)]
pub(crate) fn pow2i_f64(k: f64) -> f64 {
    f64::from_bits(((k as i64).wrapping_add(F64_EXP_BIAS) as u64) << 52)
}

/// `2^k` without a float-to-integer conversion. Same domain as [`pow2i_f64`].
///
/// Scalar model of the SSE4.1/AVX2 `F64` `pow2i`.
#[cfg(test)]
pub(crate) fn pow2i_f64_magic(k: f64) -> f64 {
    let biased = (k + F64_ROUND_MAGIC)
        .to_bits()
        .wrapping_add((F64_EXP_BIAS as u64).wrapping_sub(F64_ROUND_MAGIC_BITS));
    f64::from_bits(biased << 52)
}

/// Splits a positive normal `x` into `(e, m)` with `x = 2^e·m`, `m ∈ [1, 2)`.
#[inline(always)]
pub(crate) fn decompose_f32(x: f32) -> (f32, f32) {
    let bits = x.to_bits();
    let e = ((bits >> 23) & 0xff) as i32 - F32_EXP_BIAS;
    let m = f32::from_bits((bits & F32_MANTISSA_MASK) | F32_ONE_BITS);
    (e as f32, m)
}

/// Splits a positive normal `x` into `(e, m)` with `x = 2^e·m`, `m ∈ [1, 2)`.
#[inline(always)]
pub(crate) fn decompose_f64(x: f64) -> (f64, f64) {
    let bits = x.to_bits();
    let e = ((bits >> 52) & 0x7ff) as i64 - F64_EXP_BIAS;
    let m = f64::from_bits((bits & F64_MANTISSA_MASK) | F64_ONE_BITS);
    (e as f64, m)
}

/// Exponent of a positive normal `x` as an `f64`, without an integer-to-float
/// conversion.
///
/// Scalar model of the SSE4.1/AVX2 `F64` `decompose`.
#[cfg(test)]
pub(crate) fn exponent_f64_magic(x: f64) -> f64 {
    let biased = x.to_bits() >> 52;
    f64::from_bits(biased | F64_TWO_POW_52_BITS) - (F64_TWO_POW_52 + F64_EXP_BIAS as f64)
}
