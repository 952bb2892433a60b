//! Per-tier entry points and their tables.
//!
//! [`kernel_tier!`] stamps out one module per (tier, precision) pair. Every
//! function in it is the batch driver monomorphised for the tier's register
//! type and compiled under the tier's target features, so the generic
//! kernels inline into code that may use those instructions.

use super::{BinaryKernel, BinaryOp, KernelTable, UnaryKernel, UnaryOp};

macro_rules! kernel_tier {
    (#[$attr:meta] $name:ident: $scalar:ty => $vec:ty) => {
        kernel_tier!(@module #[$attr] $name: $scalar => $vec;
            unary {
                Exp => exp,
                Exp2 => exp2,
                Log => log,
                Log2 => log2,
                Log10 => log10,
                Log1p => log1p,
                Sin => sin,
                Cos => cos,
                Tan => tan,
                Sinh => sinh,
                Cosh => cosh,
                Tanh => tanh,
                Asin => asin,
                Acos => acos,
                Atan => atan,
                Asinh => asinh,
                Acosh => acosh,
                Atanh => atanh,
                Erf => erf,
                Sigmoid => sigmoid,
                Silu => silu,
                Gelu => gelu,
            }
            binary {
                Atan2 => atan2,
                Pow => pow,
                Hypot => hypot,
            }
        );
    };
    (@module #[$attr:meta] $name:ident: $scalar:ty => $vec:ty;
        unary { $($uop:ident => $ukernel:ident,)* }
        binary { $($bop:ident => $bkernel:ident,)* }
    ) => {
        pub(crate) mod $name {
            use super::*;
            use crate::{driver, kernels};

            $(
                #[$attr]
                unsafe fn $ukernel(src: *const $scalar, dst: *mut $scalar, len: usize) {
                    driver::unary::<$vec, _>(src, dst, len, kernels::$ukernel::<$vec>)
                }
            )*

            $(
                #[$attr]
                unsafe fn $bkernel(
                    a: *const $scalar,
                    b: *const $scalar,
                    dst: *mut $scalar,
                    len: usize,
                ) {
                    driver::binary::<$vec, _>(a, b, dst, len, kernels::$bkernel::<$vec>)
                }
            )*

            #[$attr]
            unsafe fn softmax(src: *const $scalar, dst: *mut $scalar, len: usize) {
                driver::softmax::<$vec>(src, dst, len)
            }

            const fn unary_kernel(op: UnaryOp) -> UnaryKernel<$scalar> {
                match op {
                    $(UnaryOp::$uop => $ukernel as UnaryKernel<$scalar>,)*
                }
            }

            const fn binary_kernel(op: BinaryOp) -> BinaryKernel<$scalar> {
                match op {
                    $(BinaryOp::$bop => $bkernel as BinaryKernel<$scalar>,)*
                }
            }

            pub(crate) static TABLE: KernelTable<$scalar> = {
                let mut unary = [unary_kernel(UnaryOp::Exp); UnaryOp::COUNT];
                let mut i = 0;
                while i < UnaryOp::COUNT {
                    unary[i] = unary_kernel(UnaryOp::ALL[i]);
                    i += 1;
                }

                let mut binary = [binary_kernel(BinaryOp::Atan2); BinaryOp::COUNT];
                let mut i = 0;
                while i < BinaryOp::COUNT {
                    binary[i] = binary_kernel(BinaryOp::ALL[i]);
                    i += 1;
                }

                KernelTable {
                    unary,
                    binary,
                    softmax: softmax as UnaryKernel<$scalar>,
                }
            };
        }
    };
}

kernel_tier!(#[inline] fallback_f32: f32 => f32);
kernel_tier!(#[inline] fallback_f64: f64 => f64);

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
kernel_tier!(#[target_feature(enable = "sse4.1")] sse41_f32: f32 => crate::simd::sse41::F32x4);
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
kernel_tier!(#[target_feature(enable = "sse4.1")] sse41_f64: f64 => crate::simd::sse41::F64x2);

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
kernel_tier!(#[target_feature(enable = "avx2,fma")] avx2_f32: f32 => crate::simd::avx2::F32x8);
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
kernel_tier!(#[target_feature(enable = "avx2,fma")] avx2_f64: f64 => crate::simd::avx2::F64x4);

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512))]
kernel_tier!(#[target_feature(enable = "avx512f")] avx512_f32: f32 => crate::simd::avx512::F32x16);
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512))]
kernel_tier!(#[target_feature(enable = "avx512f")] avx512_f64: f64 => crate::simd::avx512::F64x8);

#[cfg(target_arch = "aarch64")]
kernel_tier!(#[target_feature(enable = "neon")] neon_f32: f32 => crate::simd::neon::F32x4);
#[cfg(target_arch = "aarch64")]
kernel_tier!(#[target_feature(enable = "neon")] neon_f64: f64 => crate::simd::neon::F64x2);
