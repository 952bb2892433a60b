use crate::simd::SimdFloat;

/// Evaluates `c[0]·xⁿ + c[1]·xⁿ⁻¹ + … + c[n]` with Horner's method.
///
/// Coefficients are ordered from the highest degree down. An empty set
/// evaluates to zero.
#[inline(always)]
pub fn horner<V: SimdFloat>(x: V, coeffs: &[V::Scalar]) -> V {
    match coeffs.split_first() {
        Some((&first, rest)) => rest
            .iter()
            .fold(V::splat(first), |acc, &c| acc.mul_add(x, V::splat(c))),
        None => V::constant(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluates_highest_degree_first() {
        // 2x² - 3x + 1
        assert_eq!(horner(3.0f64, &[2.0, -3.0, 1.0]), 10.0);
        assert_eq!(horner(0.5f32, &[2.0, -3.0, 1.0]), 0.0);
    }

    #[test]
    fn degenerate_sets() {
        assert_eq!(horner(7.0f64, &[]), 0.0);
        assert_eq!(horner(7.0f64, &[4.0]), 4.0);
    }
}
