#![cfg_attr(avx512_nightly, feature(avx512_target_feature, stdarch_x86_avx512))]

//! Vectorized transcendental functions with runtime SIMD dispatch.
//!
//! Every function comes in two forms: `f(input, output)` writes
//! `min(input.len(), output.len())` results into `output`, and
//! `f_inplace(data)` overwrites its argument. Both accept `f32`, `f64`,
//! [`half::f16`] and [`half::bf16`]; the 16-bit types are computed through
//! the `f32` kernels.
//!
//! ```
//! let x = [0.0f32, 1.0, -1.0];
//! let mut y = [0.0f32; 3];
//! simdly_math::exp(&x, &mut y);
//! assert!((y[1] - std::f32::consts::E).abs() < 1e-6);
//!
//! let mut z = [0.0f64, 0.5];
//! simdly_math::sigmoid_inplace(&mut z);
//! assert_eq!(z[0], 0.5);
//! ```
//!
//! The widest tier the CPU supports is chosen on first use (see
//! [`dispatch`]). Failures are reported only through IEEE values: NaN for
//! domain errors, `±∞` on overflow and `0` on underflow.
//!
//! The building blocks are public as well: [`kernels`] holds the generic
//! register-level algorithms, usable on plain `f32`/`f64` or composed into
//! new kernels, and [`SimdMath`] offers allocating and parallel variants.

mod bits;
pub mod consts;
pub mod dispatch;
mod driver;
pub mod element;
pub mod error;
pub mod kernels;
pub mod reference;
pub mod simd;
pub mod slice;

pub use dispatch::{dispatch_level, dispatcher, BinaryOp, DispatchLevel, Dispatcher, UnaryOp};
pub use element::{Element, NativeFloat};
pub use error::{MathError, Result};
pub use slice::SimdMath;

macro_rules! unary_functions {
    ($($(#[$doc:meta])* $op:ident => $name:ident, $inplace:ident;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name<T: Element>(input: &[T], output: &mut [T]) {
            T::unary(dispatcher(), UnaryOp::$op, input, output)
        }

        #[doc = concat!("In-place [`", stringify!($name), "`].")]
        #[inline]
        pub fn $inplace<T: Element>(data: &mut [T]) {
            T::unary_inplace(dispatcher(), UnaryOp::$op, data)
        }
    )*};
}

macro_rules! binary_functions {
    ($($(#[$doc:meta])* $op:ident => $name:ident, $inplace:ident;)*) => {$(
        $(#[$doc])*
        #[inline]
        pub fn $name<T: Element>(a: &[T], b: &[T], output: &mut [T]) {
            T::binary(dispatcher(), BinaryOp::$op, a, b, output)
        }

        #[doc = concat!("In-place [`", stringify!($name), "`], overwriting `a`.")]
        #[inline]
        pub fn $inplace<T: Element>(a: &mut [T], b: &[T]) {
            T::binary_inplace(dispatcher(), BinaryOp::$op, a, b)
        }
    )*};
}

unary_functions! {
    /// `eˣ`. Overflows to `+∞`, underflows to `0`.
    Exp => exp, exp_inplace;
    /// `2ˣ`.
    Exp2 => exp2, exp2_inplace;
    /// Natural logarithm. `log(0) = −∞`, negative inputs give NaN.
    Log => log, log_inplace;
    Log2 => log2, log2_inplace;
    Log10 => log10, log10_inplace;
    /// `ln(1 + x)`, accurate near zero. `log1p(−1) = −∞`.
    Log1p => log1p, log1p_inplace;
    /// Sine. `sin(±∞)` is NaN.
    Sin => sin, sin_inplace;
    Cos => cos, cos_inplace;
    Tan => tan, tan_inplace;
    Sinh => sinh, sinh_inplace;
    Cosh => cosh, cosh_inplace;
    /// Hyperbolic tangent, exactly `±1` once saturated.
    Tanh => tanh, tanh_inplace;
    /// Arcsine; `|x| > 1` gives NaN.
    Asin => asin, asin_inplace;
    /// Arccosine; `|x| > 1` gives NaN.
    Acos => acos, acos_inplace;
    Atan => atan, atan_inplace;
    Asinh => asinh, asinh_inplace;
    /// Inverse hyperbolic cosine; `x < 1` gives NaN.
    Acosh => acosh, acosh_inplace;
    /// Inverse hyperbolic tangent; `atanh(±1) = ±∞`.
    Atanh => atanh, atanh_inplace;
    /// Error function (absolute error below `1.5e-7`).
    Erf => erf, erf_inplace;
    /// Logistic function `1/(1 + e^−x)`.
    Sigmoid => sigmoid, sigmoid_inplace;
    /// `x·sigmoid(x)`.
    Silu => silu, silu_inplace;
    /// `x·½·(1 + erf(x/√2))`.
    Gelu => gelu, gelu_inplace;
}

binary_functions! {
    /// Angle of the point `(b, a)`, i.e. `atan2(y = a, x = b)`.
    Atan2 => atan2, atan2_inplace;
    /// `aᵇ` with the IEEE special cases.
    Pow => pow, pow_inplace;
    /// `√(a² + b²)` without intermediate overflow.
    Hypot => hypot, hypot_inplace;
}

/// Softmax over the first `min(input.len(), output.len())` elements.
#[inline]
pub fn softmax<T: NativeFloat>(input: &[T], output: &mut [T]) {
    dispatcher().softmax(input, output)
}

/// In-place [`softmax`].
#[inline]
pub fn softmax_inplace<T: NativeFloat>(data: &mut [T]) {
    dispatcher().softmax_inplace(data)
}
