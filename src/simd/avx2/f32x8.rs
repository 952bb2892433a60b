//! AVX2 8-lane f32 register.
//!
//! `F32x8` wraps Intel's `__m256` to run every kernel step on 8
//! single-precision values at once.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell and later, AMD Excavator and later
//! - **Target Features**: `avx2` and `fma`, enabled on the dispatcher's entry
//!   points rather than crate-wide
//!
//! # Supported Operations
//!
//! - **Memory**: unaligned `load` / `store`
//! - **Arithmetic**: `+ - * /`, negation, fused `mul_add`, `sqrt`, `min`, `max`
//! - **Rounding**: ties-to-even `round`, `floor`
//! - **Masks**: ordered comparisons producing `__m256` lane masks, `blendv` select
//! - **Exponent field**: `pow2i` and `decompose` through 32-bit integer lanes
//! - **Reductions**: horizontal max and sum

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::bits::{F32_EXP_BIAS, F32_MANTISSA_MASK, F32_ONE_BITS};
use crate::simd::{impl_arith_ops, SimdFloat};

/// Number of f32 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 8;

/// AVX2 SIMD vector containing 8 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub(crate) struct F32x8 {
    /// AVX2 256-bit vector register containing 8 packed f32 values
    pub(crate) elements: __m256,
}

impl_arith_ops!(F32x8, add: _mm256_add_ps, sub: _mm256_sub_ps, mul: _mm256_mul_ps, div: _mm256_div_ps);

impl std::ops::Neg for F32x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm256_xor_ps(self.elements, _mm256_set1_ps(-0.0)) },
        }
    }
}

impl SimdFloat for F32x8 {
    type Scalar = f32;
    type Mask = __m256;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: _mm256_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        _mm256_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm256_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { _mm256_fmadd_ps(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm256_andnot_ps(_mm256_set1_ps(-0.0), self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm256_sqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe {
                _mm256_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(
                    self.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { _mm256_floor_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_LT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_LE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_GT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_GE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_EQ_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> __m256 {
        unsafe { _mm256_cmp_ps::<_CMP_UNORD_Q>(self.elements, self.elements) }
    }

    #[inline(always)]
    fn select(mask: __m256, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm256_blendv_ps(if_false.elements, if_true.elements, mask) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        unsafe {
            let sign_bit = _mm256_set1_ps(-0.0);
            Self {
                elements: _mm256_or_ps(
                    _mm256_andnot_ps(sign_bit, self.elements),
                    _mm256_and_ps(sign_bit, sign.elements),
                ),
            }
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        unsafe {
            let k = _mm256_cvtps_epi32(self.elements);
            let biased = _mm256_add_epi32(k, _mm256_set1_epi32(F32_EXP_BIAS));
            Self {
                elements: _mm256_castsi256_ps(_mm256_slli_epi32::<23>(biased)),
            }
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let bits = _mm256_castps_si256(self.elements);
            let biased = _mm256_srli_epi32::<23>(bits);
            let e = _mm256_cvtepi32_ps(_mm256_sub_epi32(biased, _mm256_set1_epi32(F32_EXP_BIAS)));
            let m = _mm256_castsi256_ps(_mm256_or_si256(
                _mm256_and_si256(bits, _mm256_set1_epi32(F32_MANTISSA_MASK as i32)),
                _mm256_set1_epi32(F32_ONE_BITS as i32),
            ));
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f32 {
        unsafe {
            let low = _mm256_castps256_ps128(self.elements);
            let high = _mm256_extractf128_ps::<1>(self.elements);
            let quad = _mm_max_ps(low, high);
            let pairs = _mm_max_ps(quad, _mm_movehl_ps(quad, quad));
            _mm_cvtss_f32(_mm_max_ss(pairs, _mm_shuffle_ps::<0b01>(pairs, pairs)))
        }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        unsafe {
            let low = _mm256_castps256_ps128(self.elements);
            let high = _mm256_extractf128_ps::<1>(self.elements);
            let quad = _mm_add_ps(low, high);
            let pairs = _mm_add_ps(quad, _mm_movehl_ps(quad, quad));
            _mm_cvtss_f32(_mm_add_ss(pairs, _mm_shuffle_ps::<0b01>(pairs, pairs)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::check_lanes_against_scalar;

    fn has_avx2() -> bool {
        is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma")
    }

    #[test]
    fn lanes_match_scalar_lane() {
        if !has_avx2() {
            return;
        }
        let inputs = [
            0.5f32, 1.5, 2.5, -0.5, -1.5, -2.5, 3.7, -3.7, 1e6, -1e-6, 0.0, -0.0, 42.0, -42.5,
            1e-20, 7.5,
        ];
        check_lanes_against_scalar::<F32x8>(&inputs);
    }

    #[test]
    fn reductions_cover_every_lane() {
        if !has_avx2() {
            return;
        }
        let data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, -8.0];
        let v = unsafe { F32x8::load(data.as_ptr()) };
        assert_eq!(v.reduce_max(), 7.0);
        assert_eq!(v.reduce_sum(), 20.0);
    }
}
