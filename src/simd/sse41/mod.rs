//! SSE4.1 registers: 4 × f32 and 2 × f64 lanes.
//!
//! SSE4.1 has no FMA, so `mul_add` rounds twice. The f64 register has no
//! packed f64/i64 conversion either and builds exponents with the magic
//! numbers from [`crate::bits`].

pub(crate) mod f32x4;
pub(crate) mod f64x2;

pub(crate) use f32x4::F32x4;
pub(crate) use f64x2::F64x2;

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::SimdMask;

impl SimdMask for __m128 {
    #[inline(always)]
    fn and(self, other: Self) -> Self {
        unsafe { _mm_and_ps(self, other) }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        unsafe { _mm_or_ps(self, other) }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        unsafe { _mm_andnot_ps(other, self) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_ps(self) != 0 }
    }
}

impl SimdMask for __m128d {
    #[inline(always)]
    fn and(self, other: Self) -> Self {
        unsafe { _mm_and_pd(self, other) }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        unsafe { _mm_or_pd(self, other) }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        unsafe { _mm_andnot_pd(other, self) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm_movemask_pd(self) != 0 }
    }
}
