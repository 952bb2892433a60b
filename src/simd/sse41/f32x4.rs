//! SSE4.1 4-lane f32 register.
//!
//! `F32x4` wraps `__m128` for CPUs that stop short of AVX2.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Penryn and later, AMD Bulldozer and later
//! - **Target Features**: `sse4.1`, for `round_ps`, `floor_ps` and `blendv_ps`
//!
//! # Supported Operations
//!
//! - **Memory**: unaligned `load` / `store`
//! - **Arithmetic**: `+ - * /`, negation, `sqrt`, `min`, `max`; `mul_add` is a
//!   separate multiply and add and rounds twice
//! - **Rounding**: ties-to-even `round`, `floor`
//! - **Masks**: `cmp*_ps` lane masks, `blendv` select
//! - **Exponent field**: `pow2i` and `decompose` via `cvtps_epi32` and 32-bit shifts
//! - **Reductions**: horizontal max and sum with `movehl` / `shuffle`

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::bits::{F32_EXP_BIAS, F32_MANTISSA_MASK, F32_ONE_BITS};
use crate::simd::{impl_arith_ops, SimdFloat};

/// Number of f32 elements that fit in a 128-bit SSE register.
pub(crate) const LANE_COUNT: usize = 4;

/// SSE register containing 4 packed f32 values.
#[derive(Copy, Clone, Debug)]
pub(crate) struct F32x4 {
    pub(crate) elements: __m128,
}

impl_arith_ops!(F32x4, add: _mm_add_ps, sub: _mm_sub_ps, mul: _mm_mul_ps, div: _mm_div_ps);

impl std::ops::Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { _mm_xor_ps(self.elements, _mm_set1_ps(-0.0)) },
        }
    }
}

impl SimdFloat for F32x4 {
    type Scalar = f32;
    type Mask = __m128;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: _mm_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        _mm_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        self * a + b
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm_andnot_ps(_mm_set1_ps(-0.0), self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm_sqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_min_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm_max_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe {
                _mm_round_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(self.elements)
            },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { _mm_floor_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> __m128 {
        unsafe { _mm_cmplt_ps(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> __m128 {
        unsafe { _mm_cmple_ps(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> __m128 {
        unsafe { _mm_cmpgt_ps(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> __m128 {
        unsafe { _mm_cmpge_ps(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> __m128 {
        unsafe { _mm_cmpeq_ps(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> __m128 {
        unsafe { _mm_cmpunord_ps(self.elements, self.elements) }
    }

    #[inline(always)]
    fn select(mask: __m128, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm_blendv_ps(if_false.elements, if_true.elements, mask) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        unsafe {
            let sign_bit = _mm_set1_ps(-0.0);
            Self {
                elements: _mm_or_ps(
                    _mm_andnot_ps(sign_bit, self.elements),
                    _mm_and_ps(sign_bit, sign.elements),
                ),
            }
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        unsafe {
            let k = _mm_cvtps_epi32(self.elements);
            let biased = _mm_add_epi32(k, _mm_set1_epi32(F32_EXP_BIAS));
            Self {
                elements: _mm_castsi128_ps(_mm_slli_epi32::<23>(biased)),
            }
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let bits = _mm_castps_si128(self.elements);
            let biased = _mm_srli_epi32::<23>(bits);
            let e = _mm_cvtepi32_ps(_mm_sub_epi32(biased, _mm_set1_epi32(F32_EXP_BIAS)));
            let m = _mm_castsi128_ps(_mm_or_si128(
                _mm_and_si128(bits, _mm_set1_epi32(F32_MANTISSA_MASK as i32)),
                _mm_set1_epi32(F32_ONE_BITS as i32),
            ));
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f32 {
        unsafe {
            let pairs = _mm_max_ps(self.elements, _mm_movehl_ps(self.elements, self.elements));
            let single = _mm_max_ss(pairs, _mm_shuffle_ps::<0b01>(pairs, pairs));
            _mm_cvtss_f32(single)
        }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        unsafe {
            let pairs = _mm_add_ps(self.elements, _mm_movehl_ps(self.elements, self.elements));
            let single = _mm_add_ss(pairs, _mm_shuffle_ps::<0b01>(pairs, pairs));
            _mm_cvtss_f32(single)
        }
    }
}
