//! Element types accepted by the public batch functions.
//!
//! `f32` and `f64` run their own kernels. The 16-bit formats (`f16`, `bf16`)
//! are promoted to `f32` in stack-sized chunks, run through the `f32`
//! kernels and rounded back down.

use half::slice::HalfFloatSliceExt;
use half::{bf16, f16};

use crate::consts::MathConsts;
use crate::dispatch::{BinaryOp, Dispatcher, KernelTable, UnaryOp};

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for half::f16 {}
    impl Sealed for half::bf16 {}
}

/// Precisions with their own kernel tables: `f32` and `f64`.
pub trait NativeFloat: MathConsts + sealed::Sealed {
    #[doc(hidden)]
    fn kernels(dispatcher: &Dispatcher) -> &'static KernelTable<Self>;
}

impl NativeFloat for f32 {
    #[inline]
    fn kernels(dispatcher: &Dispatcher) -> &'static KernelTable<f32> {
        dispatcher.f32_table()
    }
}

impl NativeFloat for f64 {
    #[inline]
    fn kernels(dispatcher: &Dispatcher) -> &'static KernelTable<f64> {
        dispatcher.f64_table()
    }
}

/// Element types of the public batch functions.
///
/// Implemented for `f32`, `f64`, [`half::f16`] and [`half::bf16`].
pub trait Element: Copy + sealed::Sealed {
    #[doc(hidden)]
    fn unary(dispatcher: &Dispatcher, op: UnaryOp, input: &[Self], output: &mut [Self]);
    #[doc(hidden)]
    fn unary_inplace(dispatcher: &Dispatcher, op: UnaryOp, data: &mut [Self]);
    #[doc(hidden)]
    fn binary(dispatcher: &Dispatcher, op: BinaryOp, a: &[Self], b: &[Self], output: &mut [Self]);
    #[doc(hidden)]
    fn binary_inplace(dispatcher: &Dispatcher, op: BinaryOp, a: &mut [Self], b: &[Self]);
}

macro_rules! impl_native_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            #[inline]
            fn unary(dispatcher: &Dispatcher, op: UnaryOp, input: &[$t], output: &mut [$t]) {
                dispatcher.unary(op, input, output)
            }

            #[inline]
            fn unary_inplace(dispatcher: &Dispatcher, op: UnaryOp, data: &mut [$t]) {
                dispatcher.unary_inplace(op, data)
            }

            #[inline]
            fn binary(dispatcher: &Dispatcher, op: BinaryOp, a: &[$t], b: &[$t], output: &mut [$t]) {
                dispatcher.binary(op, a, b, output)
            }

            #[inline]
            fn binary_inplace(dispatcher: &Dispatcher, op: BinaryOp, a: &mut [$t], b: &[$t]) {
                dispatcher.binary_inplace(op, a, b)
            }
        }
    )*};
}

impl_native_element!(f32, f64);

/// Elements promoted per round trip through the `f32` kernels.
const PROMOTE_CHUNK: usize = 256;

macro_rules! impl_promoted_element {
    ($($t:ty),*) => {$(
        impl Element for $t {
            fn unary(dispatcher: &Dispatcher, op: UnaryOp, input: &[$t], output: &mut [$t]) {
                let mut wide = [0.0f32; PROMOTE_CHUNK];
                for (src, dst) in input.chunks(PROMOTE_CHUNK).zip(output.chunks_mut(PROMOTE_CHUNK)) {
                    let n = src.len().min(dst.len());
                    let wide = &mut wide[..n];
                    src[..n].convert_to_f32_slice(wide);
                    dispatcher.unary_inplace(op, wide);
                    dst[..n].convert_from_f32_slice(wide);
                }
            }

            fn unary_inplace(dispatcher: &Dispatcher, op: UnaryOp, data: &mut [$t]) {
                let mut wide = [0.0f32; PROMOTE_CHUNK];
                for chunk in data.chunks_mut(PROMOTE_CHUNK) {
                    let wide = &mut wide[..chunk.len()];
                    chunk.convert_to_f32_slice(wide);
                    dispatcher.unary_inplace(op, wide);
                    chunk.convert_from_f32_slice(wide);
                }
            }

            fn binary(dispatcher: &Dispatcher, op: BinaryOp, a: &[$t], b: &[$t], output: &mut [$t]) {
                let mut lhs = [0.0f32; PROMOTE_CHUNK];
                let mut rhs = [0.0f32; PROMOTE_CHUNK];
                let chunks = a
                    .chunks(PROMOTE_CHUNK)
                    .zip(b.chunks(PROMOTE_CHUNK))
                    .zip(output.chunks_mut(PROMOTE_CHUNK));
                for ((x, y), dst) in chunks {
                    let n = x.len().min(y.len()).min(dst.len());
                    let (lhs, rhs) = (&mut lhs[..n], &mut rhs[..n]);
                    x[..n].convert_to_f32_slice(lhs);
                    y[..n].convert_to_f32_slice(rhs);
                    dispatcher.binary_inplace(op, lhs, rhs);
                    dst[..n].convert_from_f32_slice(lhs);
                }
            }

            fn binary_inplace(dispatcher: &Dispatcher, op: BinaryOp, a: &mut [$t], b: &[$t]) {
                let mut lhs = [0.0f32; PROMOTE_CHUNK];
                let mut rhs = [0.0f32; PROMOTE_CHUNK];
                for (x, y) in a.chunks_mut(PROMOTE_CHUNK).zip(b.chunks(PROMOTE_CHUNK)) {
                    let n = x.len().min(y.len());
                    let (lhs, rhs) = (&mut lhs[..n], &mut rhs[..n]);
                    x[..n].convert_to_f32_slice(lhs);
                    y[..n].convert_to_f32_slice(rhs);
                    dispatcher.binary_inplace(op, lhs, rhs);
                    x[..n].convert_from_f32_slice(lhs);
                }
            }
        }
    )*};
}

impl_promoted_element!(f16, bf16);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::DispatchLevel;

    fn fallback() -> Dispatcher {
        Dispatcher::for_level(DispatchLevel::Fallback).unwrap()
    }

    #[test]
    fn half_precision_rounds_the_f32_result() {
        let d = fallback();
        let input: Vec<f16> = (0..300).map(|i| f16::from_f32(i as f32 * 0.01 - 1.5)).collect();
        let mut output = vec![f16::ZERO; input.len()];
        <f16 as Element>::unary(&d, UnaryOp::Exp, &input, &mut output);
        for (x, y) in input.iter().zip(&output) {
            let want = f16::from_f32(crate::kernels::exp(x.to_f32()));
            assert_eq!(y.to_bits(), want.to_bits(), "exp({x})");
        }
    }

    #[test]
    fn bf16_in_place_and_binary() {
        let d = fallback();
        let mut data = vec![bf16::from_f32(4.0); 260];
        let exponents = vec![bf16::from_f32(0.5); 259];
        <bf16 as Element>::binary_inplace(&d, BinaryOp::Pow, &mut data, &exponents);
        assert!(data[..259].iter().all(|v| (v.to_f32() - 2.0).abs() < 1e-2));
        assert_eq!(data[259].to_f32(), 4.0);

        <bf16 as Element>::unary_inplace(&d, UnaryOp::Log2, &mut data);
        assert!((data[0].to_f32() - 1.0).abs() < 1e-2);
    }

    #[test]
    fn shortest_slice_bounds_the_work() {
        let d = fallback();
        let input = [f16::ONE; 5];
        let mut output = [f16::NAN; 3];
        <f16 as Element>::unary(&d, UnaryOp::Log, &input, &mut output);
        assert!(output.iter().all(|v| *v == f16::ZERO));
    }
}
