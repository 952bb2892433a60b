//! NEON 2-lane f64 register.

use std::arch::aarch64::*;

use crate::bits::{F64_EXP_BIAS, F64_MANTISSA_MASK, F64_ONE_BITS};
use crate::simd::{impl_arith_ops, SimdFloat};

pub(crate) const LANE_COUNT: usize = 2;

/// A SIMD vector of 2 64-bit floating point values
#[derive(Copy, Clone, Debug)]
pub(crate) struct F64x2 {
    pub(crate) elements: float64x2_t,
}

impl_arith_ops!(F64x2, add: vaddq_f64, sub: vsubq_f64, mul: vmulq_f64, div: vdivq_f64);

impl std::ops::Neg for F64x2 {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: unsafe { vnegq_f64(self.elements) },
        }
    }
}

impl SimdFloat for F64x2 {
    type Scalar = f64;
    type Mask = uint64x2_t;

    const LANES: usize = LANE_COUNT;

    #[inline(always)]
    unsafe fn load(ptr: *const f64) -> Self {
        Self {
            elements: vld1q_f64(ptr),
        }
    }

    #[inline(always)]
    unsafe fn store(self, ptr: *mut f64) {
        vst1q_f64(ptr, self.elements)
    }

    #[inline(always)]
    fn splat(value: f64) -> Self {
        Self {
            elements: unsafe { vdupq_n_f64(value) },
        }
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self {
            elements: unsafe { vfmaq_f64(b.elements, self.elements, a.elements) },
        }
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self {
            elements: unsafe { vabsq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn sqrt(self) -> Self {
        Self {
            elements: unsafe { vsqrtq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn min(self, other: Self) -> Self {
        Self {
            elements: unsafe { vminq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn max(self, other: Self) -> Self {
        Self {
            elements: unsafe { vmaxq_f64(self.elements, other.elements) },
        }
    }

    #[inline(always)]
    fn round(self) -> Self {
        Self {
            elements: unsafe { vrndnq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn floor(self) -> Self {
        Self {
            elements: unsafe { vrndmq_f64(self.elements) },
        }
    }

    #[inline(always)]
    fn cmp_lt(self, other: Self) -> uint64x2_t {
        unsafe { vcltq_f64(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_le(self, other: Self) -> uint64x2_t {
        unsafe { vcleq_f64(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_gt(self, other: Self) -> uint64x2_t {
        unsafe { vcgtq_f64(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_ge(self, other: Self) -> uint64x2_t {
        unsafe { vcgeq_f64(self.elements, other.elements) }
    }

    #[inline(always)]
    fn cmp_eq(self, other: Self) -> uint64x2_t {
        unsafe { vceqq_f64(self.elements, other.elements) }
    }

    #[inline(always)]
    fn is_nan(self) -> uint64x2_t {
        unsafe {
            let ordered = vreinterpretq_u32_u64(vceqq_f64(self.elements, self.elements));
            vreinterpretq_u64_u32(vmvnq_u32(ordered))
        }
    }

    #[inline(always)]
    fn select(mask: uint64x2_t, if_true: Self, if_false: Self) -> Self {
        Self {
            elements: unsafe { vbslq_f64(mask, if_true.elements, if_false.elements) },
        }
    }

    #[inline(always)]
    fn copysign(self, sign: Self) -> Self {
        Self {
            elements: unsafe {
                vbslq_f64(vdupq_n_u64(1 << 63), sign.elements, self.elements)
            },
        }
    }

    #[inline(always)]
    fn pow2i(self) -> Self {
        unsafe {
            let k = vcvtq_s64_f64(self.elements);
            let biased = vaddq_s64(k, vdupq_n_s64(F64_EXP_BIAS));
            Self {
                elements: vreinterpretq_f64_s64(vshlq_n_s64::<52>(biased)),
            }
        }
    }

    #[inline(always)]
    fn decompose(self) -> (Self, Self) {
        unsafe {
            let bits = vreinterpretq_u64_f64(self.elements);
            let biased = vreinterpretq_s64_u64(vshrq_n_u64::<52>(bits));
            let e = vcvtq_f64_s64(vsubq_s64(biased, vdupq_n_s64(F64_EXP_BIAS)));
            let m = vreinterpretq_f64_u64(vorrq_u64(
                vandq_u64(bits, vdupq_n_u64(F64_MANTISSA_MASK)),
                vdupq_n_u64(F64_ONE_BITS),
            ));
            (Self { elements: e }, Self { elements: m })
        }
    }

    #[inline(always)]
    fn reduce_max(self) -> f64 {
        unsafe { vmaxvq_f64(self.elements) }
    }

    #[inline(always)]
    fn reduce_sum(self) -> f64 {
        unsafe { vaddvq_f64(self.elements) }
    }
}
