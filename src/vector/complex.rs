//! The complex-field specialization with context-aware arithmetic.

use bigdecimal::{BigDecimal, Context};

use crate::context;
use crate::error::VectorError;
use crate::field::ComplexField;
use crate::number::BigComplex;
use crate::vector::generic::{GenericVector, Magnitude};

/// A vector of arbitrary-precision complex numbers.
///
/// On top of the field-generic operations this specialization adds the
/// `_with` family: the same arithmetic under an explicit precision/rounding
/// [`Context`], with rounding applied at every intermediate step.
pub type ComplexVector = GenericVector<BigComplex, ComplexField>;

impl Magnitude for BigComplex {
    type Norm = BigDecimal;

    fn magnitude(&self) -> BigDecimal {
        self.abs()
    }

    fn magnitude_with(&self, ctx: &Context) -> BigDecimal {
        self.abs_with(ctx)
    }

    fn magnitude_pow2(&self) -> BigDecimal {
        self.abs_pow2()
    }
}

impl ComplexVector {
    /// Element-wise sum with each component rounded to `ctx`.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn add_with(&self, summand: &Self, ctx: &Context) -> Result<Self, VectorError> {
        self.check_equal_size(summand)?;
        let entries = self
            .iter()
            .zip(summand)
            .map(|(a, b)| a.add_with(b, ctx))
            .collect();
        Ok(Self::from_parts(entries, ComplexField))
    }

    /// Element-wise difference with each component rounded to `ctx`.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn subtract_with(&self, subtrahend: &Self, ctx: &Context) -> Result<Self, VectorError> {
        self.check_equal_size(subtrahend)?;
        let entries = self
            .iter()
            .zip(subtrahend)
            .map(|(a, b)| a.subtract_with(b, ctx))
            .collect();
        Ok(Self::from_parts(entries, ComplexField))
    }

    /// Dot product with context-aware multiplication, reduced left-to-right
    /// by context-aware addition: every pairwise product and every partial
    /// sum is rounded to `ctx` as it is produced.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn dot_product_with(&self, other: &Self, ctx: &Context) -> Result<BigComplex, VectorError> {
        self.check_equal_size(other)?;
        let product = self
            .iter()
            .zip(other)
            .map(|(a, b)| a.multiply_with(b, ctx))
            .reduce(|acc, term| acc.add_with(&term, ctx))
            .expect("vector holds at least one element");
        Ok(product)
    }

    /// Multiplies every element by `scalar` with context-aware
    /// multiplication.
    #[must_use]
    pub fn scalar_multiply_with(&self, scalar: &BigComplex, ctx: &Context) -> Self {
        let entries = self
            .iter()
            .map(|e| scalar.multiply_with(e, ctx))
            .collect();
        Self::from_parts(entries, ComplexField)
    }

    /// Negates every element. Negation is exact; the context is accepted for
    /// API symmetry and has no rounding effect.
    #[must_use]
    pub fn negate_with(&self, ctx: &Context) -> Self {
        let entries = self.iter().map(|e| e.negate_with(ctx)).collect();
        Self::from_parts(entries, ComplexField)
    }

    /// Taxicab norm with context-aware magnitudes and a context-rounded
    /// left-to-right reduction.
    #[must_use]
    pub fn taxicab_norm_with(&self, ctx: &Context) -> BigDecimal {
        self.iter()
            .map(|e| e.magnitude_with(ctx))
            .reduce(|acc, term| context::round(ctx, acc + term))
            .expect("vector holds at least one element")
    }

    /// Euclidean norm under `ctx`: each squared magnitude is rounded, the
    /// running sum is rounded at every step, and the final square root is
    /// computed under the context.
    #[must_use]
    pub fn euclidean_norm_with(&self, ctx: &Context) -> BigDecimal {
        self.iter()
            .map(|e| context::round(ctx, e.magnitude_pow2()))
            .reduce(|acc, term| context::round(ctx, acc + term))
            .expect("vector holds at least one element")
            .sqrt_with_context(ctx)
            .expect("sum of squared magnitudes is nonnegative")
    }

    /// Max norm over context-aware magnitudes.
    #[must_use]
    pub fn max_norm_with(&self, ctx: &Context) -> BigDecimal {
        self.iter()
            .map(|e| e.magnitude_with(ctx))
            .max()
            .expect("vector holds at least one element")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::RoundingMode;
    use std::num::NonZeroU64;
    use std::str::FromStr;

    fn c(re: i64, im: i64) -> BigComplex {
        BigComplex::new(BigDecimal::from(re), BigDecimal::from(im))
    }

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn v(elements: Vec<BigComplex>) -> ComplexVector {
        ComplexVector::from_elements(elements).expect("non-empty")
    }

    fn ctx(digits: u64) -> Context {
        Context::new(
            NonZeroU64::new(digits).expect("nonzero digits"),
            RoundingMode::HalfUp,
        )
    }

    #[test]
    fn add_with_rounds_components() {
        let a = v(vec![BigComplex::new(d("1.004"), d("0"))]);
        let b = v(vec![BigComplex::new(d("0.003"), d("0"))]);
        // 1.004 + 0.003 = 1.007, three digits half-up: 1.01
        let sum = a.add_with(&b, &ctx(3)).expect("equal sizes");
        assert_eq!(sum.element(0).expect("in range").real(), &d("1.01"));
    }

    #[test]
    fn context_ops_detect_size_mismatch() {
        let two = v(vec![c(1, 0), c(2, 0)]);
        let three = v(vec![c(1, 0), c(2, 0), c(3, 0)]);
        assert_eq!(
            two.add_with(&three, &ctx(10)).unwrap_err(),
            VectorError::SizeMismatch { left: 2, right: 3 }
        );
        assert_eq!(
            two.dot_product_with(&three, &ctx(10)).unwrap_err(),
            VectorError::SizeMismatch { left: 2, right: 3 }
        );
    }

    #[test]
    fn dot_product_with_matches_the_exact_oracle_at_wide_precision() {
        let a = v(vec![c(1, 1), c(2, 0)]);
        let b = v(vec![c(0, 1), c(1, 1)]);
        // Wide enough precision that no rounding bites on small integers.
        let product = a.dot_product_with(&b, &ctx(50)).expect("equal sizes");
        assert_eq!(product, c(1, 3));
    }

    #[test]
    fn euclidean_norm_with_is_deterministic() {
        let v = v(vec![c(3, 4), c(1, 2), c(-5, 6)]);
        let context = ctx(25);
        assert_eq!(v.euclidean_norm_with(&context), v.euclidean_norm_with(&context));
    }

    #[test]
    fn euclidean_norm_with_rounds_to_the_context() {
        // |1+1i|² + |2+0i|² = 2 + 4 = 6; sqrt(6) = 2.449489742...
        let v = v(vec![c(1, 1), c(2, 0)]);
        assert_eq!(v.euclidean_norm_with(&ctx(5)), d("2.4495"));
    }

    #[test]
    fn taxicab_norm_with_sums_context_magnitudes() {
        // |3+4i| + |0-13i| = 5 + 13 = 18, exact at any precision >= 2
        let v = v(vec![c(3, 4), c(0, -13)]);
        assert_eq!(v.taxicab_norm_with(&ctx(10)), BigDecimal::from(18));
    }

    #[test]
    fn max_norm_with_picks_the_largest_magnitude() {
        let v = v(vec![c(3, 4), c(0, -13), c(1, 0)]);
        assert_eq!(v.max_norm_with(&ctx(10)), BigDecimal::from(13));
    }

    #[test]
    fn norms_with_coincide_for_a_singleton() {
        let v = v(vec![c(3, 4)]);
        let context = ctx(10);
        let five = BigDecimal::from(5);
        assert_eq!(v.taxicab_norm_with(&context), five);
        assert_eq!(v.euclidean_norm_with(&context), five);
        assert_eq!(v.max_norm_with(&context), five);
    }

    #[test]
    fn scalar_multiply_with_one_is_the_identity() {
        let v = v(vec![c(1, 2), c(-3, 4)]);
        let one = BigComplex::new(BigDecimal::from(1), BigDecimal::from(0));
        assert_eq!(v.scalar_multiply_with(&one, &ctx(30)), v);
    }

    #[test]
    fn negate_with_equals_exact_negation() {
        let v = v(vec![c(1, -2), c(3, 4)]);
        assert_eq!(v.negate_with(&ctx(1)), v.negate());
    }
}
