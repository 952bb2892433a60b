//! AVX-512F 8-lane f64 register.
//!
//! Same layout as [`super::F32x16`] with `__m512d` and a `u8` `k` mask.
//! `scalef` and `getexp` handle the exponent field, so unlike the AVX2 and
//! SSE4.1 f64 registers no magic-number conversions are needed.
//!
//! # Supported Operations
//!
//! - **Arithmetic**: `+ - * /`, negation, `abs`, fused `mul_add`, `sqrt`, `min`, `max`
//! - **Rounding**: `roundscale`
//! - **Masks**: `cmp_pd_mask`, `mask_blend`
//! - **Reductions**: `reduce_max_pd`, `reduce_add_pd`

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{impl_arith_ops, SimdFloat};

/// The number of f64 lanes in an AVX-512 vector.
pub(crate) const LANE_COUNT: usize = 8;

/// An 8-lane, 64-bit floating-point SIMD vector using AVX-512F intrinsics.
#[derive(Copy, Clone, Debug)]
pub(crate) struct F64x8 {
    pub(crate) elements: __m512d,
}

impl_arith_ops!(F64x8, add: _mm512_add_pd, sub: _mm512_sub_pd, mul: _mm512_mul_pd, div: _mm512_div_pd);

#[inline(always)]
unsafe fn sign_bit() -> __m512i {
    _mm512_set1_epi64(i64::MIN)
}

impl std::ops::Neg for F64x8 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe {
                _mm512_castsi512_pd(_mm512_xor_si512(_mm512_castpd_si512(self.elements), sign_bit()))
            },
        }
    }
}

impl SimdFloat for F64x8 {
    type Scalar = f64;
    type Mask = __mmask8;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        Self {
            elements: _mm512_loadu_pd(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        _mm512_storeu_pd(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { _mm512_set1_pd(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { _mm512_fmadd_pd(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm512_abs_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm512_sqrt_pd(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm512_min_pd(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm512_max_pd(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe {
                _mm512_roundscale_pd::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(
                    self.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe {
                _mm512_roundscale_pd::<{ _MM_FROUND_TO_NEG_INF | _MM_FROUND_NO_EXC }>(
                    self.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_LT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_LE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_GT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_GE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_EQ_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> __mmask8 {
        unsafe { _mm512_cmp_pd_mask::<_CMP_UNORD_Q>(self.elements, self.elements) }
    }

    #[inline(always)]
    fn select(mask: __mmask8, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm512_mask_blend_pd(mask, if_false.elements, if_true.elements) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        unsafe {
            let magnitude = _mm512_andnot_si512(sign_bit(), _mm512_castpd_si512(self.elements));
            let sign = _mm512_and_si512(sign_bit(), _mm512_castpd_si512(sign.elements));
            Self {
                elements: _mm512_castsi512_pd(_mm512_or_si512(magnitude, sign)),
            }
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        Self {
            elements: unsafe { _mm512_scalef_pd(_mm512_set1_pd(1.0), self.elements) },
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let e = _mm512_getexp_pd(self.elements);
            let m = _mm512_getmant_pd::<_MM_MANT_NORM_1_2, _MM_MANT_SIGN_SRC>(self.elements);
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f64 {
        unsafe { _mm512_reduce_max_pd(self.elements) }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f64 {
        unsafe { _mm512_reduce_add_pd(self.elements) }
    }
}
