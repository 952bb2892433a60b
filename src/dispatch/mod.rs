//! Runtime selection of the widest vector tier the host supports.
//!
//! Every (tier, precision) pair owns a static [`KernelTable`] of entry
//! points, each compiled with that tier's target features. The first call to
//! [`dispatcher`] probes the CPU once, honours the
//! [`MAX_LEVEL_ENV`] cap, and publishes the chosen tables for the rest of
//! the process. Threads that race the probe are served the portable tables
//! until the probe has finished, so no caller ever blocks.
//!
//! # Example
//!
//! ```
//! use simdly_math::dispatch::{DispatchLevel, Dispatcher, UnaryOp};
//!
//! let fallback = Dispatcher::for_level(DispatchLevel::Fallback).unwrap();
//! let mut data = [0.0f32, 1.0];
//! fallback.unary_inplace(UnaryOp::Exp, &mut data);
//! assert_eq!(data[0], 1.0);
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use log::{debug, info, warn};

use crate::element::NativeFloat;
use crate::error::{invalid_level, unsupported_level, MathError, Result};

mod tiers;

/// Environment variable capping the probed level, e.g. `avx2`.
pub const MAX_LEVEL_ENV: &str = "SIMDLY_MATH_MAX_LEVEL";

/// Vector tiers in increasing width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DispatchLevel {
    /// One element at a time, any target.
    Fallback,
    /// 128-bit registers: SSE4.1 on x86, NEON on aarch64.
    Narrow,
    /// 256-bit AVX2 with FMA.
    Avx2,
    /// 512-bit AVX-512F.
    Avx512,
}

impl DispatchLevel {
    pub const ALL: [DispatchLevel; 4] = [
        DispatchLevel::Fallback,
        DispatchLevel::Narrow,
        DispatchLevel::Avx2,
        DispatchLevel::Avx512,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            DispatchLevel::Fallback => "fallback",
            DispatchLevel::Narrow => "narrow",
            DispatchLevel::Avx2 => "avx2",
            DispatchLevel::Avx512 => "avx512",
        }
    }

    /// Whether this build contains the tier and the running CPU can execute
    /// it.
    pub fn is_supported(self) -> bool {
        host_supports(self) && tables(self).is_some()
    }

    /// Every supported level, narrowest first.
    pub fn available() -> Vec<DispatchLevel> {
        DispatchLevel::ALL
            .into_iter()
            .filter(|level| level.is_supported())
            .collect()
    }
}

impl fmt::Display for DispatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DispatchLevel {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" | "scalar" => Ok(DispatchLevel::Fallback),
            "narrow" | "sse4.1" | "sse41" | "neon" => Ok(DispatchLevel::Narrow),
            "avx2" => Ok(DispatchLevel::Avx2),
            "avx512" | "avx512f" => Ok(DispatchLevel::Avx512),
            _ => Err(invalid_level(s)),
        }
    }
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
fn host_supports(level: DispatchLevel) -> bool {
    match level {
        DispatchLevel::Fallback => true,
        DispatchLevel::Narrow => is_x86_feature_detected!("sse4.1"),
        DispatchLevel::Avx2 => is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma"),
        DispatchLevel::Avx512 => is_x86_feature_detected!("avx512f"),
    }
}

#[cfg(target_arch = "aarch64")]
fn host_supports(level: DispatchLevel) -> bool {
    match level {
        DispatchLevel::Fallback => true,
        DispatchLevel::Narrow => std::arch::is_aarch64_feature_detected!("neon"),
        DispatchLevel::Avx2 | DispatchLevel::Avx512 => false,
    }
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
fn host_supports(level: DispatchLevel) -> bool {
    level == DispatchLevel::Fallback
}

/// Element-wise one-input functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Exp,
    Exp2,
    Log,
    Log2,
    Log10,
    Log1p,
    Sin,
    Cos,
    Tan,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
    Asinh,
    Acosh,
    Atanh,
    Erf,
    Sigmoid,
    Silu,
    Gelu,
}

impl UnaryOp {
    pub const COUNT: usize = 22;

    /// Every operation, in table order.
    pub const ALL: [UnaryOp; UnaryOp::COUNT] = [
        UnaryOp::Exp,
        UnaryOp::Exp2,
        UnaryOp::Log,
        UnaryOp::Log2,
        UnaryOp::Log10,
        UnaryOp::Log1p,
        UnaryOp::Sin,
        UnaryOp::Cos,
        UnaryOp::Tan,
        UnaryOp::Sinh,
        UnaryOp::Cosh,
        UnaryOp::Tanh,
        UnaryOp::Asin,
        UnaryOp::Acos,
        UnaryOp::Atan,
        UnaryOp::Asinh,
        UnaryOp::Acosh,
        UnaryOp::Atanh,
        UnaryOp::Erf,
        UnaryOp::Sigmoid,
        UnaryOp::Silu,
        UnaryOp::Gelu,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            UnaryOp::Exp => "exp",
            UnaryOp::Exp2 => "exp2",
            UnaryOp::Log => "log",
            UnaryOp::Log2 => "log2",
            UnaryOp::Log10 => "log10",
            UnaryOp::Log1p => "log1p",
            UnaryOp::Sin => "sin",
            UnaryOp::Cos => "cos",
            UnaryOp::Tan => "tan",
            UnaryOp::Sinh => "sinh",
            UnaryOp::Cosh => "cosh",
            UnaryOp::Tanh => "tanh",
            UnaryOp::Asin => "asin",
            UnaryOp::Acos => "acos",
            UnaryOp::Atan => "atan",
            UnaryOp::Asinh => "asinh",
            UnaryOp::Acosh => "acosh",
            UnaryOp::Atanh => "atanh",
            UnaryOp::Erf => "erf",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Silu => "silu",
            UnaryOp::Gelu => "gelu",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Element-wise two-input functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Atan2,
    Pow,
    Hypot,
}

impl BinaryOp {
    pub const COUNT: usize = 3;
    pub const ALL: [BinaryOp; BinaryOp::COUNT] = [BinaryOp::Atan2, BinaryOp::Pow, BinaryOp::Hypot];

    pub const fn name(self) -> &'static str {
        match self {
            BinaryOp::Atan2 => "atan2",
            BinaryOp::Pow => "pow",
            BinaryOp::Hypot => "hypot",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Entry point processing `len` elements from the first pointer into the
/// second. The pointers may be equal.
pub type UnaryKernel<T> = unsafe fn(*const T, *mut T, usize);

/// Entry point processing `len` element pairs into the third pointer, which
/// may equal either input.
pub type BinaryKernel<T> = unsafe fn(*const T, *const T, *mut T, usize);

/// The entry points of one (tier, precision) pair.
pub struct KernelTable<T> {
    unary: [UnaryKernel<T>; UnaryOp::COUNT],
    binary: [BinaryKernel<T>; BinaryOp::COUNT],
    softmax: UnaryKernel<T>,
}

impl<T> KernelTable<T> {
    #[inline]
    fn unary(&self, op: UnaryOp) -> UnaryKernel<T> {
        self.unary[op as usize]
    }

    #[inline]
    fn binary(&self, op: BinaryOp) -> BinaryKernel<T> {
        self.binary[op as usize]
    }
}

impl<T> fmt::Debug for KernelTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KernelTable")
            .field("unary", &self.unary.len())
            .field("binary", &self.binary.len())
            .finish()
    }
}

type TablePair = (&'static KernelTable<f32>, &'static KernelTable<f64>);

/// Tables compiled into this build for `level`.
fn tables(level: DispatchLevel) -> Option<TablePair> {
    match level {
        DispatchLevel::Fallback => Some((&tiers::fallback_f32::TABLE, &tiers::fallback_f64::TABLE)),
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        DispatchLevel::Narrow => Some((&tiers::sse41_f32::TABLE, &tiers::sse41_f64::TABLE)),
        #[cfg(target_arch = "aarch64")]
        DispatchLevel::Narrow => Some((&tiers::neon_f32::TABLE, &tiers::neon_f64::TABLE)),
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        DispatchLevel::Avx2 => Some((&tiers::avx2_f32::TABLE, &tiers::avx2_f64::TABLE)),
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512))]
        DispatchLevel::Avx512 => Some((&tiers::avx512_f32::TABLE, &tiers::avx512_f64::TABLE)),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}

/// A resolved set of kernel tables for both precisions.
///
/// Obtain the process-wide instance with [`dispatcher`], or pin a level
/// with [`Dispatcher::for_level`] (used by the cross-tier tests and the
/// benchmarks).
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher {
    level: DispatchLevel,
    single: &'static KernelTable<f32>,
    double: &'static KernelTable<f64>,
}

static FALLBACK: Dispatcher = Dispatcher {
    level: DispatchLevel::Fallback,
    single: &tiers::fallback_f32::TABLE,
    double: &tiers::fallback_f64::TABLE,
};

impl Dispatcher {
    /// Dispatcher pinned to `level`.
    ///
    /// Fails with [`MathError::UnsupportedLevel`] if the level is not
    /// compiled into this build or the CPU lacks its features.
    pub fn for_level(level: DispatchLevel) -> Result<Self> {
        if !host_supports(level) {
            return Err(unsupported_level(level));
        }
        let (single, double) = tables(level).ok_or_else(|| unsupported_level(level))?;
        Ok(Self {
            level,
            single,
            double,
        })
    }

    /// Probes the CPU and returns the widest supported dispatcher, capped by
    /// [`MAX_LEVEL_ENV`] when it is set.
    ///
    /// Does not touch the process-wide instance.
    pub fn detect() -> Self {
        let cap = match std::env::var(MAX_LEVEL_ENV) {
            Ok(value) => match value.parse::<DispatchLevel>() {
                Ok(level) => {
                    debug!("{MAX_LEVEL_ENV} caps dispatch at {level}");
                    level
                }
                Err(err) => {
                    warn!("ignoring {MAX_LEVEL_ENV}: {err}");
                    DispatchLevel::Avx512
                }
            },
            Err(_) => DispatchLevel::Avx512,
        };

        let dispatcher = DispatchLevel::ALL
            .into_iter()
            .rev()
            .filter(|&level| level <= cap)
            .find_map(|level| Self::for_level(level).ok())
            .unwrap_or(FALLBACK);
        debug!(
            "available dispatch levels: {:?}",
            DispatchLevel::available()
        );
        info!("simdly-math kernels dispatch at {}", dispatcher.level);
        dispatcher
    }

    pub fn level(&self) -> DispatchLevel {
        self.level
    }

    pub(crate) fn f32_table(&self) -> &'static KernelTable<f32> {
        self.single
    }

    pub(crate) fn f64_table(&self) -> &'static KernelTable<f64> {
        self.double
    }

    /// Applies `op` to `min(input.len(), output.len())` elements.
    pub fn unary<T: NativeFloat>(&self, op: UnaryOp, input: &[T], output: &mut [T]) {
        let len = input.len().min(output.len());
        let kernel = T::kernels(self).unary(op);
        // SAFETY: both slices hold at least `len` elements, and every table
        // handed out by `for_level` runs on this CPU.
        unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), len) }
    }

    /// Applies `op` to every element of `data` in place.
    pub fn unary_inplace<T: NativeFloat>(&self, op: UnaryOp, data: &mut [T]) {
        let kernel = T::kernels(self).unary(op);
        let ptr = data.as_mut_ptr();
        // SAFETY: entry points accept equal input and output pointers.
        unsafe { kernel(ptr, ptr, data.len()) }
    }

    /// Applies `op` to `min` of the three lengths element pairs.
    pub fn binary<T: NativeFloat>(&self, op: BinaryOp, a: &[T], b: &[T], output: &mut [T]) {
        let len = a.len().min(b.len()).min(output.len());
        let kernel = T::kernels(self).binary(op);
        // SAFETY: as for `unary`.
        unsafe { kernel(a.as_ptr(), b.as_ptr(), output.as_mut_ptr(), len) }
    }

    /// Applies `op` pairwise, overwriting `a`.
    pub fn binary_inplace<T: NativeFloat>(&self, op: BinaryOp, a: &mut [T], b: &[T]) {
        let len = a.len().min(b.len());
        let kernel = T::kernels(self).binary(op);
        let ptr = a.as_mut_ptr();
        // SAFETY: as for `unary_inplace`.
        unsafe { kernel(ptr, b.as_ptr(), ptr, len) }
    }

    /// Softmax over the first `min(input.len(), output.len())` elements.
    pub fn softmax<T: NativeFloat>(&self, input: &[T], output: &mut [T]) {
        let len = input.len().min(output.len());
        let kernel = T::kernels(self).softmax;
        // SAFETY: as for `unary`.
        unsafe { kernel(input.as_ptr(), output.as_mut_ptr(), len) }
    }

    pub fn softmax_inplace<T: NativeFloat>(&self, data: &mut [T]) {
        let kernel = T::kernels(self).softmax;
        let ptr = data.as_mut_ptr();
        // SAFETY: as for `unary_inplace`.
        unsafe { kernel(ptr, ptr, data.len()) }
    }
}

const UNPROBED: u8 = 0;
const PROBING: u8 = 1;
const PROBED: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNPROBED);
static ACTIVE: OnceLock<Dispatcher> = OnceLock::new();

/// The process-wide dispatcher.
///
/// The first caller probes the CPU; concurrent callers get the portable
/// tables until the probe has been published, after which every call
/// returns the same instance.
pub fn dispatcher() -> &'static Dispatcher {
    if let Some(active) = ACTIVE.get() {
        return active;
    }
    match STATE.compare_exchange(UNPROBED, PROBING, Ordering::AcqRel, Ordering::Acquire) {
        Ok(_) => {
            let active = ACTIVE.get_or_init(Dispatcher::detect);
            STATE.store(PROBED, Ordering::Release);
            active
        }
        Err(_) => ACTIVE.get().unwrap_or(&FALLBACK),
    }
}

/// Level of the process-wide dispatcher.
pub fn dispatch_level() -> DispatchLevel {
    dispatcher().level()
}
