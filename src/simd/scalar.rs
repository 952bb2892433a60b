//! Single-lane registers: the portable fallback tier.
//!
//! `f32` and `f64` act as one-lane vectors so the generic kernels run
//! unchanged on any target. Comparisons produce plain `bool` masks.

use crate::bits;
use crate::simd::SimdFloat;

macro_rules! impl_scalar_lane {
    ($scalar:ident, $pow2i:path, $decompose:path) => {
        impl SimdFloat for $scalar {
            type Scalar = $scalar;
            type Mask = bool;

            const LANES: usize = 1;

            #[inline(always)]
            unsafe fn load(ptr: *const $scalar) -> Self {
                ptr.read_unaligned()
            }

            #[inline(always)]
            unsafe fn store(self, ptr: *mut $scalar) {
                ptr.write_unaligned(self)
            }

            #[inline(always)]
            fn splat(value: $scalar) -> Self {
                value
            }

            #[inline(always)]
            fn mul_add(self, a: Self, b: Self) -> Self {
                $scalar::mul_add(self, a, b)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                $scalar::abs(self)
            }

            #[inline(always)]
            fn sqrt(self) -> Self {
                $scalar::sqrt(self)
            }

            #[inline(always)]
            fn min(self, other: Self) -> Self {
                $scalar::min(self, other)
            }

            #[inline(always)]
            fn max(self, other: Self) -> Self {
                $scalar::max(self, other)
            }

            #[inline(always)]
            fn round(self) -> Self {
                $scalar::round_ties_even(self)
            }

            #[inline(always)]
            fn floor(self) -> Self {
                $scalar::floor(self)
            }

            #[inline(always)]
            fn cmp_lt(self, other: Self) -> bool {
                self < other
            }

            #[inline(always)]
            fn cmp_le(self, other: Self) -> bool {
                self <= other
            }

            #[inline(always)]
            fn cmp_gt(self, other: Self) -> bool {
                self > other
            }

            #[inline(always)]
            fn cmp_ge(self, other: Self) -> bool {
                self >= other
            }

            #[inline(always)]
            fn cmp_eq(self, other: Self) -> bool {
                self == other
            }

            #[inline(always)]
            fn is_nan(self) -> bool {
                $scalar::is_nan(self)
            }

            #[inline(always)]
            fn select(mask: bool, if_true: Self, if_false: Self) -> Self {
                if mask {
                    if_true
                } else {
                    if_false
                }
            }

            #[inline(always)]
            fn copysign(self, sign: Self) -> Self {
                $scalar::copysign(self, sign)
            }

            #[inline(always)]
            fn pow2i(self) -> Self {
                $pow2i(self)
            }

            #[inline(always)]
            fn decompose(self) -> (Self, Self) {
                $decompose(self)
            }

            #[inline(always)]
            fn reduce_max(self) -> $scalar {
                self
            }

            #[inline(always)]
            fn reduce_sum(self) -> $scalar {
                self
            }
        }
    };
}

impl_scalar_lane!(f32, bits::pow2i_f32, bits::decompose_f32);
impl_scalar_lane!(f64, bits::pow2i_f64, bits::decompose_f64);
