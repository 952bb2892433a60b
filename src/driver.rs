//! Batch driver: the only layer that touches memory.
//!
//! Full registers are loaded straight from the input, transformed and stored
//! to the output. The remaining `len % LANES` elements are copied into a
//! stack scratch register padded with a value that is harmless for every
//! kernel, run through the same kernel once, and the valid prefix is copied
//! back. Each register is loaded before it is stored, so the input and the
//! output may be the same buffer.

use std::ptr;

use num::{Float, One, Zero};

use crate::kernels;
use crate::simd::SimdFloat;

/// Widest register the driver has to pad for (`F32x16`).
pub(crate) const MAX_LANES: usize = 16;

/// Padding for the unary tail. `1` is inside the domain of every kernel.
#[inline(always)]
fn unary_pad<V: SimdFloat>() -> V::Scalar {
    <V::Scalar as One>::one()
}

/// Applies `kernel` to `len` elements of `src`, writing to `dst`.
///
/// # Safety
///
/// `src` must be valid for reading and `dst` for writing `len` elements.
/// `src` and `dst` may be equal but must not otherwise overlap. The caller
/// must run on a CPU supporting the features `V` is compiled for.
#[inline(always)]
pub(crate) unsafe fn unary<V, F>(src: *const V::Scalar, dst: *mut V::Scalar, len: usize, kernel: F)
where
    V: SimdFloat,
    F: Fn(V) -> V,
{
    debug_assert!(V::LANES <= MAX_LANES);
    let lanes = V::LANES;
    let full = len - len % lanes;

    let mut i = 0;
    while i < full {
        kernel(V::load(src.add(i))).store(dst.add(i));
        i += lanes;
    }

    let rest = len - full;
    if rest > 0 {
        let mut scratch = [unary_pad::<V>(); MAX_LANES];
        ptr::copy_nonoverlapping(src.add(full), scratch.as_mut_ptr(), rest);
        kernel(V::load(scratch.as_ptr())).store(scratch.as_mut_ptr());
        ptr::copy_nonoverlapping(scratch.as_ptr(), dst.add(full), rest);
    }
}

/// Two-input version of [`unary`].
///
/// # Safety
///
/// As for [`unary`], with both `a` and `b` valid for reading `len`
/// elements; either may equal `dst`.
#[inline(always)]
pub(crate) unsafe fn binary<V, F>(
    a: *const V::Scalar,
    b: *const V::Scalar,
    dst: *mut V::Scalar,
    len: usize,
    kernel: F,
) where
    V: SimdFloat,
    F: Fn(V, V) -> V,
{
    debug_assert!(V::LANES <= MAX_LANES);
    let lanes = V::LANES;
    let full = len - len % lanes;

    let mut i = 0;
    while i < full {
        kernel(V::load(a.add(i)), V::load(b.add(i))).store(dst.add(i));
        i += lanes;
    }

    let rest = len - full;
    if rest > 0 {
        let mut lhs = [unary_pad::<V>(); MAX_LANES];
        let mut rhs = [unary_pad::<V>(); MAX_LANES];
        ptr::copy_nonoverlapping(a.add(full), lhs.as_mut_ptr(), rest);
        ptr::copy_nonoverlapping(b.add(full), rhs.as_mut_ptr(), rest);
        kernel(V::load(lhs.as_ptr()), V::load(rhs.as_ptr())).store(lhs.as_mut_ptr());
        ptr::copy_nonoverlapping(lhs.as_ptr(), dst.add(full), rest);
    }
}

/// Softmax over the whole buffer.
///
/// Three passes: the maximum, `exp(x − max)` into `dst` while summing, then
/// scaling `dst` by the reciprocal of the sum. The tail is padded with `−∞`,
/// which is neutral for the maximum and exponentiates to `0`.
///
/// # Safety
///
/// As for [`unary`].
#[inline(always)]
pub(crate) unsafe fn softmax<V: SimdFloat>(src: *const V::Scalar, dst: *mut V::Scalar, len: usize) {
    if len == 0 {
        return;
    }
    let lanes = V::LANES;
    let full = len - len % lanes;
    let rest = len - full;
    let neg_inf = <V::Scalar as Float>::neg_infinity();

    let mut tail = [neg_inf; MAX_LANES];
    ptr::copy_nonoverlapping(src.add(full), tail.as_mut_ptr(), rest);

    let mut peak = V::splat(neg_inf);
    let mut i = 0;
    while i < full {
        peak = peak.max(V::load(src.add(i)));
        i += lanes;
    }
    let peak = V::splat(peak.max(V::load(tail.as_ptr())).reduce_max());

    let mut sum = V::splat(<V::Scalar as Zero>::zero());
    let mut i = 0;
    while i < full {
        let e = kernels::exp(V::load(src.add(i)) - peak);
        e.store(dst.add(i));
        sum = sum + e;
        i += lanes;
    }
    let e = kernels::exp(V::load(tail.as_ptr()) - peak);
    e.store(tail.as_mut_ptr());
    sum = sum + e;
    ptr::copy_nonoverlapping(tail.as_ptr(), dst.add(full), rest);

    let scale = V::splat(<V::Scalar as One>::one() / sum.reduce_sum());
    unary::<V, _>(dst, dst, len, |x| x * scale);
}
