//! SSE4.1 2-lane f64 register.
//!
//! # Architecture Requirements
//!
//! - **Target Features**: `sse4.1`; no FMA, so `mul_add` rounds twice
//!
//! # Supported Operations
//!
//! - **Arithmetic and rounding**: `+ - * /`, `sqrt`, `min`, `max`, `round`, `floor`
//! - **Masks**: `cmp*_pd` lane masks, `blendv` select
//! - **Exponent field**: no packed f64/i64 conversion below AVX-512, so
//!   `pow2i` and `decompose` use the `2^52` magic numbers from [`crate::bits`]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::bits::{
    F64_EXP_BIAS, F64_MANTISSA_MASK, F64_ONE_BITS, F64_ROUND_MAGIC, F64_ROUND_MAGIC_BITS,
    F64_TWO_POW_52, F64_TWO_POW_52_BITS,
};
use crate::simd::{impl_arith_ops, SimdFloat};

/// Number of f64 elements that fit in a 128-bit SSE register.
pub(crate) const LANE_COUNT: usize = 2;

/// SSE register containing 2 packed f64 values.
#[derive(Copy, Clone, Debug)]
pub(crate) struct F64x2 {
    pub(crate) elements: __m128d,
}

impl_arith_ops!(F64x2, add: _mm_add_pd, sub: _mm_sub_pd, mul: _mm_mul_pd, div: _mm_div_pd);

impl std::ops::Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_pd(self.elements, _mm_set1_pd(-0.0)) },
        }
    }
}

impl SimdFloat for F64x2 {
    type Scalar = f64;
    type Mask = __m128d;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        Self {
            elements: _mm_loadu_pd(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        _mm_storeu_pd(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm_set1_pd(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm_andnot_pd(_mm_set1_pd(-0.0), self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm_sqrt_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_pd(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_pd(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe {
                _mm_round_pd::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(self.elements)
            },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { _mm_floor_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> __m128d {
        unsafe { _mm_cmplt_pd(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> __m128d {
        unsafe { _mm_cmple_pd(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> __m128d {
        unsafe { _mm_cmpgt_pd(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> __m128d {
        unsafe { _mm_cmpge_pd(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> __m128d {
        unsafe { _mm_cmpeq_pd(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> __m128d {
        unsafe { _mm_cmpunord_pd(self.elements, self.elements) }
    }

    #[inline(always)]
    fn select(mask: __m128d, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm_blendv_pd(if_false.elements, if_true.elements, mask) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        unsafe {
            let sign_bit = _mm_set1_pd(-0.0);
            Self {
                elements: _mm_or_pd(
                    _mm_andnot_pd(sign_bit, self.elements),
                    _mm_and_pd(sign_bit, sign.elements),
                ),
            }
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        unsafe {
            let shifted = _mm_castpd_si128(_mm_add_pd(self.elements, _mm_set1_pd(F64_ROUND_MAGIC)));
            let rebias = F64_EXP_BIAS.wrapping_sub(F64_ROUND_MAGIC_BITS as i64);
            let biased = _mm_add_epi64(shifted, _mm_set1_epi64x(rebias));
            Self {
                elements: _mm_castsi128_pd(_mm_slli_epi64::<52>(biased)),
            }
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let bits = _mm_castpd_si128(self.elements);
            let biased = _mm_or_si128(
                _mm_srli_epi64::<52>(bits),
                _mm_set1_epi64x(F64_TWO_POW_52_BITS as i64),
            );
            let e = _mm_sub_pd(
                _mm_castsi128_pd(biased),
                _mm_set1_pd(F64_TWO_POW_52 + F64_EXP_BIAS as f64),
            );
            let m = _mm_castsi128_pd(_mm_or_si128(
                _mm_and_si128(bits, _mm_set1_epi64x(F64_MANTISSA_MASK as i64)),
                _mm_set1_epi64x(F64_ONE_BITS as i64),
            ));
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f64 {
        unsafe {
            let high = _mm_unpackhi_pd(self.elements, self.elements);
            _mm_cvtsd_f64(_mm_max_sd(self.elements, high))
        }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f64 {
        unsafe {
            let high = _mm_unpackhi_pd(self.elements, self.elements);
            _mm_cvtsd_f64(_mm_add_sd(self.elements, high))
        }
    }
}
