//! AVX2 4-lane f64 register.
//!
//! `F64x4` wraps Intel's `__m256d` and carries 4 double-precision values
//! through the kernels.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Haswell and later, AMD Excavator and later
//! - **Target Features**: `avx2` and `fma`, enabled per entry point by the
//!   dispatcher
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 256 bits (4 × f64)
//! - **Exponent Handling**: AVX2 lacks `cvtpd_epi64`, so `pow2i` and
//!   `decompose` go through the `2^52` magic-number tricks in [`crate::bits`]
//!
//! # Supported Operations
//!
//! - **Memory**: unaligned `load` / `store`
//! - **Arithmetic**: `+ - * /`, negation, fused `mul_add`, `sqrt`, `min`, `max`
//! - **Rounding**: ties-to-even `round`, `floor`
//! - **Masks**: `_mm256_cmp_pd` lane masks, `blendv` select
//! - **Exponent field**: `pow2i` and `decompose` on 64-bit integer lanes
//! - **Reductions**: horizontal max and sum by folding the two 128-bit halves

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::bits::{
    F64_EXP_BIAS, F64_MANTISSA_MASK, F64_ONE_BITS, F64_ROUND_MAGIC, F64_ROUND_MAGIC_BITS,
    F64_TWO_POW_52, F64_TWO_POW_52_BITS,
};
use crate::simd::{impl_arith_ops, SimdFloat};

/// Number of f64 elements that fit in an AVX2 256-bit vector.
pub(crate) const LANE_COUNT: usize = 4;

/// AVX2 SIMD vector containing 4 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub(crate) struct F64x4 {
    pub(crate) elements: __m256d,
}

impl_arith_ops!(F64x4, add: _mm256_add_pd, sub: _mm256_sub_pd, mul: _mm256_mul_pd, div: _mm256_div_pd);

impl std::ops::Neg for F64x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm256_xor_pd(self.elements, _mm256_set1_pd(-0.0)) },
        }
    }
}

impl SimdFloat for F64x4 {
    type Scalar = f64;
    type Mask = __m256d;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        Self {
            elements: _mm256_loadu_pd(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        _mm256_storeu_pd(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm256_set1_pd(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { _mm256_fmadd_pd(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm256_andnot_pd(_mm256_set1_pd(-0.0), self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm256_sqrt_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm256_min_pd(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm256_max_pd(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe {
                _mm256_round_pd::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(
                    self.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { _mm256_floor_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_LT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_LE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_GT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_GE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_EQ_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> __m256d {
        unsafe { _mm256_cmp_pd::<_CMP_UNORD_Q>(self.elements, self.elements) }
    }

    #[inline(always)]
    fn select(mask: __m256d, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm256_blendv_pd(if_false.elements, if_true.elements, mask) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        unsafe {
            let sign_bit = _mm256_set1_pd(-0.0);
            Self {
                elements: _mm256_or_pd(
                    _mm256_andnot_pd(sign_bit, self.elements),
                    _mm256_and_pd(sign_bit, sign.elements),
                ),
            }
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        unsafe {
            let shifted =
                _mm256_castpd_si256(_mm256_add_pd(self.elements, _mm256_set1_pd(F64_ROUND_MAGIC)));
            let rebias = F64_EXP_BIAS.wrapping_sub(F64_ROUND_MAGIC_BITS as i64);
            let biased = _mm256_add_epi64(shifted, _mm256_set1_epi64x(rebias));
            Self {
                elements: _mm256_castsi256_pd(_mm256_slli_epi64::<52>(biased)),
            }
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let bits = _mm256_castpd_si256(self.elements);
            let biased = _mm256_or_si256(
                _mm256_srli_epi64::<52>(bits),
                _mm256_set1_epi64x(F64_TWO_POW_52_BITS as i64),
            );
            let e = _mm256_sub_pd(
                _mm256_castsi256_pd(biased),
                _mm256_set1_pd(F64_TWO_POW_52 + F64_EXP_BIAS as f64),
            );
            let m = _mm256_castsi256_pd(_mm256_or_si256(
                _mm256_and_si256(bits, _mm256_set1_epi64x(F64_MANTISSA_MASK as i64)),
                _mm256_set1_epi64x(F64_ONE_BITS as i64),
            ));
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f64 {
        unsafe {
            let low = _mm256_castpd256_pd128(self.elements);
            let high = _mm256_extractf128_pd::<1>(self.elements);
            let pair = _mm_max_pd(low, high);
            _mm_cvtsd_f64(_mm_max_sd(pair, _mm_unpackhi_pd(pair, pair)))
        }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f64 {
        unsafe {
            let low = _mm256_castpd256_pd128(self.elements);
            let high = _mm256_extractf128_pd::<1>(self.elements);
            let pair = _mm_add_pd(low, high);
            _mm_cvtsd_f64(_mm_add_sd(pair, _mm_unpackhi_pd(pair, pair)))
        }
    }
}
