//! AVX-512F 16-lane f32 register.
//!
//! `F32x16` wraps `__m512` and pairs it with a `u16` `k` mask, one bit per lane.
//!
//! # Architecture Requirements
//!
//! - **CPU Support**: Intel Skylake-SP and later, AMD Zen 4 and later
//! - **Target Features**: `avx512f`, enabled per entry point by the dispatcher
//! - **Compilation**: only built when `build.rs` finds stable AVX-512
//!   intrinsics (Rust 1.89+) or a nightly toolchain
//!
//! # Performance Characteristics
//!
//! - **Vector Width**: 512 bits (16 × f32)
//! - **Frequency**: heavy 512-bit FMA work can lower clocks on older Intel parts
//!
//! # Supported Operations
//!
//! - **Memory**: unaligned `load` / `store`
//! - **Arithmetic**: `+ - * /`, negation, `abs`, fused `mul_add`, `sqrt`, `min`, `max`
//! - **Rounding**: `roundscale` for both `round` and `floor`
//! - **Masks**: `cmp_ps_mask` into `k` registers, `mask_blend` select
//! - **Exponent field**: `scalef` for `pow2i`, `getexp` / `getmant` for `decompose`
//! - **Reductions**: native `reduce_max` and `reduce_add`

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::{impl_arith_ops, SimdFloat};

/// The number of f32 lanes in an AVX-512 vector.
pub(crate) const LANE_COUNT: usize = 16;

/// A 16-lane, 32-bit floating-point SIMD vector using AVX-512F intrinsics.
#[derive(Copy, Clone, Debug)]
pub(crate) struct F32x16 {
    pub(crate) elements: __m512,
}

impl_arith_ops!(F32x16, add: _mm512_add_ps, sub: _mm512_sub_ps, mul: _mm512_mul_ps, div: _mm512_div_ps);

#[inline(always)]
unsafe fn sign_bit() -> __m512i {
    _mm512_set1_epi32(i32::MIN)
}

impl std::ops::Neg for F32x16 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe {
                _mm512_castsi512_ps(_mm512_xor_si512(_mm512_castps_si512(self.elements), sign_bit()))
            },
        }
    }
}

impl SimdFloat for F32x16 {
    type Scalar = f32;
    type Mask = __mmask16;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: _mm512_loadu_ps(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        _mm512_storeu_ps(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { _mm512_set1_ps(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { _mm512_fmadd_ps(self.elements, a.elements, b.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { _mm512_abs_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { _mm512_sqrt_ps(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm512_min_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { _mm512_max_ps(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe {
                _mm512_roundscale_ps::<{ _MM_FROUND_TO_NEAREST_INT | _MM_FROUND_NO_EXC }>(
                    self.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe {
                _mm512_roundscale_ps::<{ _MM_FROUND_TO_NEG_INF | _MM_FROUND_NO_EXC }>(
                    self.elements,
                )
            },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_LT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_LE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_GT_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_GE_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_EQ_OQ>(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> __mmask16 {
        unsafe { _mm512_cmp_ps_mask::<_CMP_UNORD_Q>(self.elements, self.elements) }
    }

    #[inline(always)]
    fn select(mask: __mmask16, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { _mm512_mask_blend_ps(mask, if_false.elements, if_true.elements) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        unsafe {
            let magnitude = _mm512_andnot_si512(sign_bit(), _mm512_castps_si512(self.elements));
            let sign = _mm512_and_si512(sign_bit(), _mm512_castps_si512(sign.elements));
            Self {
                elements: _mm512_castsi512_ps(_mm512_or_si512(magnitude, sign)),
            }
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        Self {
            elements: unsafe { _mm512_scalef_ps(_mm512_set1_ps(1.0), self.elements) },
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let e = _mm512_getexp_ps(self.elements);
            let m = _mm512_getmant_ps::<_MM_MANT_NORM_1_2, _MM_MANT_SIGN_SRC>(self.elements);
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f32 {
        unsafe { _mm512_reduce_max_ps(self.elements) }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        unsafe { _mm512_reduce_add_ps(self.elements) }
    }
}
