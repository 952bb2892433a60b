//! AVX-512F registers: 16 × f32 and 8 × f64 lanes.
//!
//! Compiled only when the toolchain exposes the AVX-512 intrinsics (see
//! `build.rs`). Comparisons produce `k` mask registers, exponents are built
//! with `scalef` and split with `getexp` / `getmant`.

pub(crate) mod f32x16;
pub(crate) mod f64x8;

pub(crate) use f32x16::F32x16;
pub(crate) use f64x8::F64x8;

use crate::simd::SimdMask;

macro_rules! impl_kmask {
    ($($mask:ty),*) => {
        $(
            impl SimdMask for $mask {
                #[inline(always)]
                fn and(self, other: Self) -> Self {
                    self & other
                }

                #[inline(always)]
                fn or(self, other: Self) -> Self {
                    self | other
                }

                #[inline(always)]
                fn and_not(self, other: Self) -> Self {
                    self & !other
                }

                #[inline(always)]
                fn any(self) -> bool {
                    self != 0
                }
            }
        )*
    };
}

// `__mmask16` and `__mmask8` are plain integer aliases.
impl_kmask!(u16, u8);
