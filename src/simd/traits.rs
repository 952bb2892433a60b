use std::ops::{Add, Div, Mul, Neg, Sub};

use num::Float;

use crate::consts::MathConsts;

/// Per-lane boolean produced by comparisons and consumed by `select`.
pub trait SimdMask: Copy {
    fn and(self, other: Self) -> Self;
    fn or(self, other: Self) -> Self;
    /// `self & !other`.
    fn and_not(self, other: Self) -> Self;
    /// Whether at least one lane is set.
    fn any(self) -> bool;
}

/// The capability set every vector tier provides.
///
/// Kernels in [`crate::kernels`] are written once against this trait. A
/// register type executes every operation on all of its lanes; branching is
/// expressed with comparison masks and [`SimdFloat::select`].
///
/// Besides the lane-parallel vector types used internally by the dispatcher,
/// `f32` and `f64` implement this trait as single-lane registers, so every
/// kernel can be called directly on scalars.
pub trait SimdFloat:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Scalar: MathConsts;
    type Mask: SimdMask;

    /// Number of lanes in one register.
    const LANES: usize;

    /// Loads `LANES` values from unaligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reading `LANES` consecutive values.
    unsafe fn load(ptr: *const Self::Scalar) -> Self;

    /// Stores `LANES` values to unaligned memory.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writing `LANES` consecutive values.
    unsafe fn store(self, ptr: *mut Self::Scalar);

    fn splat(value: Self::Scalar) -> Self;

    /// Broadcasts an `f64` literal rounded to the lane precision.
    #[inline(always)]
    fn constant(value: f64) -> Self {
        Self::splat(<Self::Scalar as MathConsts>::from_f64(value))
    }

    /// `self·a + b`, fused where the tier has FMA.
    fn mul_add(self, a: Self, b: Self) -> Self;
    fn abs(self) -> Self;
    fn sqrt(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    /// Round to nearest, ties to even.
    fn round(self) -> Self;
    fn floor(self) -> Self;

    fn cmp_lt(self, other: Self) -> Self::Mask;
    fn cmp_le(self, other: Self) -> Self::Mask;
    fn cmp_gt(self, other: Self) -> Self::Mask;
    fn cmp_ge(self, other: Self) -> Self::Mask;
    fn cmp_eq(self, other: Self) -> Self::Mask;
    fn is_nan(self) -> Self::Mask;

    /// Lane-wise `if mask { if_true } else { if_false }`.
    fn select(mask: Self::Mask, if_true: Self, if_false: Self) -> Self;

    /// Magnitude of `self` with the sign bit of `sign`.
    fn copysign(self, sign: Self) -> Self;

    /// `2^k` for integral `k`.
    ///
    /// Only defined for `k` inside the normal exponent range of the lane type
    /// (`[-126, 127]` for f32, `[-1022, 1023]` for f64). Lanes outside that
    /// range produce unspecified finite or infinite values and must be
    /// overwritten by the caller.
    fn pow2i(self) -> Self;

    /// Splits `self` into `(e, m)` with `self = 2^e·m` and `m ∈ [1, 2)`.
    ///
    /// Only defined for positive, normal, finite lanes; anything else yields
    /// unspecified values that the caller must overwrite.
    fn decompose(self) -> (Self, Self);

    fn reduce_max(self) -> Self::Scalar;
    fn reduce_sum(self) -> Self::Scalar;

    /// Lanes whose sign bit is set, including `-0.0` and negative NaNs.
    #[inline(always)]
    fn is_sign_negative(self) -> Self::Mask {
        let one = Self::constant(1.0);
        one.copysign(self).cmp_lt(Self::constant(0.0))
    }

    /// Lanes equal to `+∞` or `-∞`.
    #[inline(always)]
    fn is_infinite(self) -> Self::Mask {
        self.abs()
            .cmp_eq(Self::splat(<Self::Scalar as Float>::infinity()))
    }
}

impl SimdMask for bool {
    #[inline(always)]
    fn and(self, other: bool) -> bool {
        self & other
    }

    #[inline(always)]
    fn or(self, other: bool) -> bool {
        self | other
    }

    #[inline(always)]
    fn and_not(self, other: bool) -> bool {
        self & !other
    }

    #[inline(always)]
    fn any(self) -> bool {
        self
    }
}
