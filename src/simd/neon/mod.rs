//! ARM NEON registers for 128-bit vector operations.
//!
//! NEON is architectural on AArch64, so these types need no runtime
//! detection beyond the dispatcher's sanity check. NEON has fused
//! multiply-add, directed rounding and 64-bit float/integer conversions for
//! both precisions, so neither register needs the magic-number exponent
//! tricks of the x86 f64 tiers.
//!
//! # Available Types
//!
//! - [`F32x4`]: 4 packed single-precision values (`float32x4_t`)
//! - [`F64x2`]: 2 packed double-precision values (`float64x2_t`)

pub(crate) mod f32x4;
pub(crate) mod f64x2;

pub(crate) use f32x4::F32x4;
pub(crate) use f64x2::F64x2;

use std::arch::aarch64::*;

use crate::simd::SimdMask;

impl SimdMask for uint32x4_t {
    #[inline(always)]
    fn and(self, other: Self) -> Self {
        unsafe { vandq_u32(self, other) }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        unsafe { vorrq_u32(self, other) }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        unsafe { vbicq_u32(self, other) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(self) != 0 }
    }
}

impl SimdMask for uint64x2_t {
    #[inline(always)]
    fn and(self, other: Self) -> Self {
        unsafe { vandq_u64(self, other) }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        unsafe { vorrq_u64(self, other) }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        unsafe { vbicq_u64(self, other) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { vmaxvq_u32(vreinterpretq_u32_u64(self)) != 0 }
    }
}
