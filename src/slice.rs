//! Allocating slice conveniences over the dispatched kernels.
//!
//! [`SimdMath`] mirrors the three flavours every operation comes in:
//!
//! | Method | Strategy |
//! |--------|----------|
//! | `simd_*` | Dispatched vector kernels on the calling thread |
//! | `par_simd_*` | Dispatched kernels on `rayon` chunks once the input is large |
//! | `scalar_*` | The [`crate::reference`] functions, one element at a time |
//!
//! ```rust
//! use simdly_math::dispatch::UnaryOp;
//! use simdly_math::SimdMath;
//!
//! let x: Vec<f32> = (0..1000).map(|i| i as f32 * 0.01).collect();
//! let fast = x.simd_unary(UnaryOp::Sigmoid);
//! let slow = x.scalar_unary(UnaryOp::Sigmoid);
//! assert!(fast.iter().zip(&slow).all(|(a, b)| (a - b).abs() < 1e-6));
//! ```

use num::traits::FloatConst;
use rayon::prelude::*;

use crate::dispatch::{dispatcher, BinaryOp, UnaryOp};
use crate::element::NativeFloat;
use crate::reference;

/// Elements handed to one `rayon` task.
pub const PARALLEL_CHUNK_SIZE: usize = 16 * 1024;

/// Inputs shorter than this run on the calling thread even through the
/// `par_simd_*` methods.
pub const PARALLEL_SIMD_THRESHOLD: usize = 4 * PARALLEL_CHUNK_SIZE;

/// Element-wise math over slices, returning freshly allocated vectors.
///
/// Binary methods pair `self` with `rhs` and produce `min` of the two
/// lengths.
pub trait SimdMath<T> {
    fn simd_unary(&self, op: UnaryOp) -> Vec<T>;
    fn par_simd_unary(&self, op: UnaryOp) -> Vec<T>;
    fn scalar_unary(&self, op: UnaryOp) -> Vec<T>;

    fn simd_binary(&self, op: BinaryOp, rhs: &[T]) -> Vec<T>;
    fn par_simd_binary(&self, op: BinaryOp, rhs: &[T]) -> Vec<T>;
    fn scalar_binary(&self, op: BinaryOp, rhs: &[T]) -> Vec<T>;

    fn simd_softmax(&self) -> Vec<T>;
    fn scalar_softmax(&self) -> Vec<T>;
}

impl<T> SimdMath<T> for [T]
where
    T: NativeFloat + FloatConst,
{
    fn simd_unary(&self, op: UnaryOp) -> Vec<T> {
        let mut out = vec![T::zero(); self.len()];
        dispatcher().unary(op, self, &mut out);
        out
    }

    fn par_simd_unary(&self, op: UnaryOp) -> Vec<T> {
        if self.len() < PARALLEL_SIMD_THRESHOLD {
            return self.simd_unary(op);
        }
        let d = dispatcher();
        let mut out = vec![T::zero(); self.len()];
        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|(dst, src)| d.unary(op, src, dst));
        out
    }

    fn scalar_unary(&self, op: UnaryOp) -> Vec<T> {
        self.iter().map(|&x| reference::unary(op, x)).collect()
    }

    fn simd_binary(&self, op: BinaryOp, rhs: &[T]) -> Vec<T> {
        let mut out = vec![T::zero(); self.len().min(rhs.len())];
        dispatcher().binary(op, self, rhs, &mut out);
        out
    }

    fn par_simd_binary(&self, op: BinaryOp, rhs: &[T]) -> Vec<T> {
        let len = self.len().min(rhs.len());
        if len < PARALLEL_SIMD_THRESHOLD {
            return self.simd_binary(op, rhs);
        }
        let d = dispatcher();
        let mut out = vec![T::zero(); len];
        out.par_chunks_mut(PARALLEL_CHUNK_SIZE)
            .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
            .zip(rhs.par_chunks(PARALLEL_CHUNK_SIZE))
            .for_each(|((dst, a), b)| d.binary(op, a, b, dst));
        out
    }

    fn scalar_binary(&self, op: BinaryOp, rhs: &[T]) -> Vec<T> {
        self.iter()
            .zip(rhs)
            .map(|(&a, &b)| reference::binary(op, a, b))
            .collect()
    }

    fn simd_softmax(&self) -> Vec<T> {
        let mut out = vec![T::zero(); self.len()];
        dispatcher().softmax(self, &mut out);
        out
    }

    fn scalar_softmax(&self) -> Vec<T> {
        let mut out = self.to_vec();
        reference::softmax(&mut out);
        out
    }
}
