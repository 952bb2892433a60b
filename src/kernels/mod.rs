//! Generic vector kernels.
//!
//! Each kernel is one algorithm (range reduction, polynomial, reconstruction,
//! special-value fix-ups) written against [`SimdFloat`] and instantiated for
//! every register type by the dispatcher. Kernels never touch memory and can
//! be composed register-to-register: `sigmoid` calls `exp`, `gelu` calls
//! `erf`, and so on.
//!
//! Special values are handled by computing the normal path on every lane and
//! then overwriting lanes with `select`, most general condition first so the
//! most specific one wins.
//!
//! All kernels are also usable on plain `f32` / `f64`:
//!
//! ```
//! use simdly_math::kernels;
//!
//! assert!((kernels::exp(1.0f64) - std::f64::consts::E).abs() < 1e-15);
//! assert_eq!(kernels::sigmoid(0.0f32), 0.5);
//! ```
//!
//! [`SimdFloat`]: crate::simd::SimdFloat

/// Scalar constant from the lane type's table.
macro_rules! cst {
    ($v:ident :: $name:ident) => {
        <<$v as $crate::simd::SimdFloat>::Scalar as $crate::consts::MathConsts>::$name
    };
}

/// Constant from the lane type's table broadcast to every lane.
macro_rules! splat {
    ($v:ident :: $name:ident) => {
        <$v as $crate::simd::SimdFloat>::splat(cst!($v::$name))
    };
}

mod activation;
mod erf;
mod exp;
mod hyperbolic;
mod inverse_trig;
mod log;
mod poly;
mod power;
mod trig;

pub use activation::{gelu, sigmoid, silu, softmax_lanes, tanh};
pub use erf::erf;
pub use exp::{exp, exp2};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh};
pub use inverse_trig::{acos, asin, atan, atan2};
pub use self::log::{log, log10, log1p, log2};
pub use poly::horner;
pub use power::{hypot, pow};
pub use trig::{cos, sin, tan};
