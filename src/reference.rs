//! Scalar reference implementations.
//!
//! Straightforward compositions of the standard library functions (through
//! [`num::Float`]) and `statrs` for the error function. They define what
//! the vector kernels are measured against in the tests and serve as the
//! `scalar_*` baseline of [`crate::slice::SimdMath`] and the benchmarks.

use num::traits::FloatConst;
use num::Float;

use crate::dispatch::{BinaryOp, UnaryOp};

/// Error function through `statrs` in double precision.
pub fn erf<T: Float>(x: T) -> T {
    x.to_f64()
        .map(statrs::function::erf::erf)
        .and_then(T::from)
        .unwrap_or_else(T::nan)
}

pub fn sigmoid<T: Float>(x: T) -> T {
    T::one() / (T::one() + (-x).exp())
}

pub fn silu<T: Float>(x: T) -> T {
    if x == T::neg_infinity() {
        -T::zero()
    } else {
        x * sigmoid(x)
    }
}

pub fn gelu<T: Float + FloatConst>(x: T) -> T {
    if x == T::neg_infinity() {
        return -T::zero();
    }
    let half = T::one() / (T::one() + T::one());
    x * half * (T::one() + erf(x * T::FRAC_1_SQRT_2()))
}

/// Scalar value of `op` at `x`.
pub fn unary<T: Float + FloatConst>(op: UnaryOp, x: T) -> T {
    match op {
        UnaryOp::Exp => x.exp(),
        UnaryOp::Exp2 => x.exp2(),
        UnaryOp::Log => x.ln(),
        UnaryOp::Log2 => x.log2(),
        UnaryOp::Log10 => x.log10(),
        UnaryOp::Log1p => x.ln_1p(),
        UnaryOp::Sin => x.sin(),
        UnaryOp::Cos => x.cos(),
        UnaryOp::Tan => x.tan(),
        UnaryOp::Sinh => x.sinh(),
        UnaryOp::Cosh => x.cosh(),
        UnaryOp::Tanh => x.tanh(),
        UnaryOp::Asin => x.asin(),
        UnaryOp::Acos => x.acos(),
        UnaryOp::Atan => x.atan(),
        UnaryOp::Asinh => x.asinh(),
        UnaryOp::Acosh => x.acosh(),
        // std's formula cancels for x near −1
        UnaryOp::Atanh => x.abs().atanh().copysign(x),
        UnaryOp::Erf => erf(x),
        UnaryOp::Sigmoid => sigmoid(x),
        UnaryOp::Silu => silu(x),
        UnaryOp::Gelu => gelu(x),
    }
}

/// Scalar value of `op` at `(a, b)`; `atan2` takes `a` as `y`.
pub fn binary<T: Float>(op: BinaryOp, a: T, b: T) -> T {
    match op {
        BinaryOp::Atan2 => a.atan2(b),
        BinaryOp::Pow => a.powf(b),
        BinaryOp::Hypot => a.hypot(b),
    }
}

/// Softmax over `values`, in place.
pub fn softmax<T: Float>(values: &mut [T]) {
    let peak = values.iter().copied().fold(T::neg_infinity(), T::max);
    let mut total = T::zero();
    for v in values.iter_mut() {
        *v = (*v - peak).exp();
        total = total + *v;
    }
    for v in values.iter_mut() {
        *v = *v / total;
    }
}
