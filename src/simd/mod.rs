//! Register types and the capability set the kernels are written against.
//!
//! | Tier | f32 register | f64 register | Target features |
//! |------|--------------|--------------|-----------------|
//! | Fallback | `f32` | `f64` | none |
//! | Narrow (x86) | `sse41::F32x4` | `sse41::F64x2` | `sse4.1` |
//! | Narrow (aarch64) | `neon::F32x4` | `neon::F64x2` | `neon` |
//! | Avx2 | `avx2::F32x8` | `avx2::F64x4` | `avx2`, `fma` |
//! | Avx512 | `avx512::F32x16` | `avx512::F64x8` | `avx512f` |
//!
//! The vector register types are crate-private: their methods are only
//! sound inside functions compiled for the matching target features, and
//! the dispatcher is the only place that creates such functions.

mod scalar;
pub mod traits;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) mod sse41;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) mod avx2;

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), avx512))]
pub(crate) mod avx512;

#[cfg(target_arch = "aarch64")]
pub(crate) mod neon;

pub use traits::{SimdFloat, SimdMask};

/// Implements the arithmetic operators of a register wrapper from the
/// matching intrinsics.
#[allow(unused_macros)]
macro_rules! impl_arith_ops {
    ($vec:ident, add: $add:ident, sub: $sub:ident, mul: $mul:ident, div: $div:ident) => {
        impl std::ops::Add for $vec {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $add(self.elements, rhs.elements) },
                }
            }
        }

        impl std::ops::Sub for $vec {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $sub(self.elements, rhs.elements) },
                }
            }
        }

        impl std::ops::Mul for $vec {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $mul(self.elements, rhs.elements) },
                }
            }
        }

        impl std::ops::Div for $vec {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self {
                    elements: unsafe { $div(self.elements, rhs.elements) },
                }
            }
        }
    };
}

#[allow(unused_imports)]
pub(crate) use impl_arith_ops;

/// Checks a register type lane by lane against the portable scalar lane.
///
/// Used by the per-tier unit tests; the caller guarantees the CPU supports
/// the tier.
#[cfg(test)]
#[allow(dead_code)]
pub(crate) fn check_lanes_against_scalar<V>(inputs: &[V::Scalar])
where
    V: SimdFloat,
    V::Scalar: SimdFloat<Scalar = V::Scalar>,
{
    use num::Float;

    let mut buffer = vec![<V::Scalar as num::Zero>::zero(); V::LANES];
    let mut lanes = vec![<V::Scalar as num::Zero>::zero(); V::LANES];
    for chunk in inputs.chunks_exact(V::LANES) {
        let x = unsafe { V::load(chunk.as_ptr()) };
        let half = V::constant(0.5);

        let cases: [(&str, V, fn(V::Scalar) -> V::Scalar); 4] = [
            ("round", x.round(), |s| SimdFloat::round(s)),
            ("floor", x.floor(), |s| SimdFloat::floor(s)),
            ("abs", x.abs(), |s| SimdFloat::abs(s)),
            ("mul_add", x.mul_add(half, x), |s| {
                SimdFloat::mul_add(s, SimdFloat::constant(0.5), s)
            }),
        ];

        let max = chunk.iter().copied().fold(<V::Scalar as Float>::neg_infinity(), Float::max);
        assert_eq!(x.reduce_max(), max);

        let positive = x.abs() + V::constant(1.0);
        let (e, m) = positive.decompose();
        let rebuilt = m * e.pow2i();
        unsafe { rebuilt.store(lanes.as_mut_ptr()) };
        unsafe { positive.store(buffer.as_mut_ptr()) };
        assert_eq!(lanes, buffer, "decompose/pow2i round trip");

        let picked = V::select(x.cmp_lt(V::constant(0.0)), -x, x);
        unsafe { picked.store(lanes.as_mut_ptr()) };
        unsafe { x.abs().store(buffer.as_mut_ptr()) };
        assert_eq!(lanes, buffer, "select on sign");

        for (name, value, scalar) in cases {
            unsafe { value.store(buffer.as_mut_ptr()) };
            for (lane, (&got, &input)) in buffer.iter().zip(chunk).enumerate() {
                let expected = scalar(input);
                assert!(
                    got == expected || (Float::is_nan(got) && Float::is_nan(expected)),
                    "{name} lane {lane}: {got:?} != {expected:?} for input {input:?}"
                );
            }
        }
    }
}
