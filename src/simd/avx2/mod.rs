//! AVX2 registers for 256-bit vector operations.
//!
//! AVX2 is available on Intel processors since Haswell (2013) and AMD
//! processors since Excavator (2015). Every entry point that uses these types
//! is compiled with `avx2,fma`, so `mul_add` is a real fused multiply-add.
//!
//! # Available Types
//!
//! - [`F32x8`]: 8 packed single-precision values
//! - [`F64x4`]: 4 packed double-precision values
//!
//! AVX2 has no packed f64/i64 conversion; `F64x4` builds and reads exponents
//! with the magic numbers from [`crate::bits`].

pub(crate) mod f32x8;
pub(crate) mod f64x4;

pub(crate) use f32x8::F32x8;
pub(crate) use f64x4::F64x4;

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use crate::simd::SimdMask;

impl SimdMask for __m256 {
    #[inline(always)]
    fn and(self, other: Self) -> Self {
        unsafe { _mm256_and_ps(self, other) }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        unsafe { _mm256_or_ps(self, other) }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        unsafe { _mm256_andnot_ps(other, self) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_ps(self) != 0 }
    }
}

impl SimdMask for __m256d {
    #[inline(always)]
    fn and(self, other: Self) -> Self {
        unsafe { _mm256_and_pd(self, other) }
    }

    #[inline(always)]
    fn or(self, other: Self) -> Self {
        unsafe { _mm256_or_pd(self, other) }
    }

    #[inline(always)]
    fn and_not(self, other: Self) -> Self {
        unsafe { _mm256_andnot_pd(other, self) }
    }

    #[inline(always)]
    fn any(self) -> bool {
        unsafe { _mm256_movemask_pd(self) != 0 }
    }
}
