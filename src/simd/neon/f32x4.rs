//! NEON 4-lane f32 register.

use std::arch::aarch64::*;

use crate::bits::{F32_EXP_BIAS, F32_MANTISSA_MASK, F32_ONE_BITS};
use crate::simd::{impl_arith_ops, SimdFloat};

pub(crate) const LANE_COUNT: usize = 4;

/// A SIMD vector of 4 32-bit floating point values
#[derive(Copy, Clone, Debug)]
pub(crate) struct F32x4 {
    pub(crate) elements: float32x4_t,
}

impl_arith_ops!(F32x4, add: vaddq_f32, sub: vsubq_f32, mul: vmulq_f32, div: vdivq_f32);

impl std::ops::Neg for F32x4 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { vnegq_f32(self.elements) },
        }
    }
}

impl SimdFloat for F32x4 {
    type Scalar = f32;
    type Mask = uint32x4_t;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f32) -> Self {
        Self {
            elements: vld1q_f32(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f32) {
        vst1q_f32(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f32) -> Self {
        Self {
            elements: unsafe { vdupq_n_f32(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmaq_f32(b.elements, self.elements, a.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { vabsq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { vsqrtq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { vminq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { vmaxq_f32(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe { vrndnq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { vrndmq_f32(self.elements) },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> uint32x4_t {
        unsafe { vcltq_f32(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> uint32x4_t {
        unsafe { vcleq_f32(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> uint32x4_t {
        unsafe { vcgtq_f32(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> uint32x4_t {
        unsafe { vcgeq_f32(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> uint32x4_t {
        unsafe { vceqq_f32(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> uint32x4_t {
        unsafe { vmvnq_u32(vceqq_f32(self.elements, self.elements)) }
    }

    #[inline(always)]
    fn select(mask: uint32x4_t, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { vbslq_f32(mask, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        Self {
            elements: unsafe {
                vbslq_f32(vdupq_n_u32(0x8000_0000), sign.elements, self.elements)
            },
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        unsafe {
            let k = vcvtq_s32_f32(self.elements);
            let biased = vaddq_s32(k, vdupq_n_s32(F32_EXP_BIAS));
            Self {
                elements: vreinterpretq_f32_s32(vshlq_n_s32::<23>(biased)),
            }
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let bits = vreinterpretq_u32_f32(self.elements);
            let biased = vreinterpretq_s32_u32(vshrq_n_u32::<23>(bits));
            let e = vcvtq_f32_s32(vsubq_s32(biased, vdupq_n_s32(F32_EXP_BIAS)));
            let m = vreinterpretq_f32_u32(vorrq_u32(
                vandq_u32(bits, vdupq_n_u32(F32_MANTISSA_MASK)),
                vdupq_n_u32(F32_ONE_BITS),
            ));
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f32 {
        unsafe { vmaxvq_f32(self.elements) }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f32 {
        unsafe { vaddvq_f32(self.elements) }
    }
}
