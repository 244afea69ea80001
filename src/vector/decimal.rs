//! The real-valued (decimal) specialization with context-aware arithmetic.

use bigdecimal::{BigDecimal, Context};

use crate::context;
use crate::error::VectorError;
use crate::field::DecimalField;
use crate::vector::generic::{GenericVector, Magnitude};

/// A vector of arbitrary-precision real numbers.
pub type DecimalVector = GenericVector<BigDecimal, DecimalField>;

impl Magnitude for BigDecimal {
    type Norm = BigDecimal;

    fn magnitude(&self) -> BigDecimal {
        self.abs()
    }

    fn magnitude_with(&self, ctx: &Context) -> BigDecimal {
        // The absolute value of a decimal is exact; only the context's
        // precision cap applies.
        context::round(ctx, self.abs())
    }

    fn magnitude_pow2(&self) -> BigDecimal {
        self * self
    }
}

impl DecimalVector {
    /// Element-wise sum with each result rounded to `ctx`.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn add_with(&self, summand: &Self, ctx: &Context) -> Result<Self, VectorError> {
        self.check_equal_size(summand)?;
        let entries = self
            .iter()
            .zip(summand)
            .map(|(a, b)| context::round(ctx, a + b))
            .collect();
        Ok(Self::from_parts(entries, DecimalField))
    }

    /// Element-wise difference with each result rounded to `ctx`.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn subtract_with(&self, subtrahend: &Self, ctx: &Context) -> Result<Self, VectorError> {
        self.check_equal_size(subtrahend)?;
        let entries = self
            .iter()
            .zip(subtrahend)
            .map(|(a, b)| context::round(ctx, a - b))
            .collect();
        Ok(Self::from_parts(entries, DecimalField))
    }

    /// Dot product with every pairwise product and partial sum rounded to
    /// `ctx`.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn dot_product_with(&self, other: &Self, ctx: &Context) -> Result<BigDecimal, VectorError> {
        self.check_equal_size(other)?;
        let product = self
            .iter()
            .zip(other)
            .map(|(a, b)| context::round(ctx, a * b))
            .reduce(|acc, term| context::round(ctx, acc + term))
            .expect("vector holds at least one element");
        Ok(product)
    }

    /// Multiplies every element by `scalar`, rounding each product to `ctx`.
    #[must_use]
    pub fn scalar_multiply_with(&self, scalar: &BigDecimal, ctx: &Context) -> Self {
        let entries = self
            .iter()
            .map(|e| context::round(ctx, scalar * e))
            .collect();
        Self::from_parts(entries, DecimalField)
    }

    /// Euclidean norm under `ctx`: squared elements and the running sum are
    /// rounded per step, the final square root is computed under the context.
    #[must_use]
    pub fn euclidean_norm_with(&self, ctx: &Context) -> BigDecimal {
        self.iter()
            .map(|e| context::round(ctx, e.magnitude_pow2()))
            .reduce(|acc, term| context::round(ctx, acc + term))
            .expect("vector holds at least one element")
            .sqrt_with_context(ctx)
            .expect("sum of squares is nonnegative")
    }

    /// Taxicab norm with a context-rounded reduction.
    #[must_use]
    pub fn taxicab_norm_with(&self, ctx: &Context) -> BigDecimal {
        self.iter()
            .map(|e| e.magnitude_with(ctx))
            .reduce(|acc, term| context::round(ctx, acc + term))
            .expect("vector holds at least one element")
    }

    /// Max norm over context-rounded magnitudes.
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

    fn d(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    fn v(elements: &[&str]) -> DecimalVector {
        DecimalVector::from_elements(elements.iter().map(|s| d(s)).collect())
            .expect("non-empty")
    }

    fn ctx(digits: u64) -> Context {
        Context::new(
            NonZeroU64::new(digits).expect("nonzero digits"),
            RoundingMode::HalfEven,
        )
    }

    #[test]
    fn three_four_norms() {
        let v = v(&["3", "-4"]);
        assert_eq!(v.taxicab_norm(), BigDecimal::from(7));
        assert_eq!(v.euclidean_norm_with(&ctx(10)), BigDecimal::from(5));
        assert_eq!(v.max_norm(), BigDecimal::from(4));
    }

    #[test]
    fn dot_product_with_rounds_per_step() {
        // 1.234*1.111 = 1.370974 -> 1.371 at 4 digits
        // 2.222*3.333 = 7.405926 -> 7.406 at 4 digits
        // 1.371 + 7.406 = 8.777, exact at 4 digits
        let a = v(&["1.234", "2.222"]);
        let b = v(&["1.111", "3.333"]);
        assert_eq!(
            a.dot_product_with(&b, &ctx(4)).expect("equal sizes"),
            d("8.777")
        );
    }

    #[test]
    fn generic_arithmetic_applies_to_decimals() {
        let a = v(&["1.5", "2.5"]);
        let b = v(&["0.5", "0.5"]);
        assert_eq!(a.add(&b).expect("equal sizes"), v(&["2.0", "3.0"]));
        assert_eq!(a.subtract(&b).expect("equal sizes"), v(&["1.0", "2.0"]));
        assert_eq!(
            a.dot_product(&b).expect("equal sizes"),
            d("2.00")
        );
        assert_eq!(a.scalar_multiply(&d("2")), v(&["3.0", "5.0"]));
    }

    #[test]
    fn scalar_multiply_with_caps_precision() {
        let a = v(&["1.234"]);
        assert_eq!(
            a.scalar_multiply_with(&d("2.345"), &ctx(3)),
            v(&["2.89"])
        );
    }

    #[test]
    fn taxicab_norm_with_caps_the_running_sum() {
        let a = v(&["1.234", "-2.345"]);
        // magnitudes round first: 1.23 and 2.34 at 3 digits half-even,
        // then the sum 3.57 needs no further rounding
        assert_eq!(a.taxicab_norm_with(&ctx(3)), d("3.57"));
    }
}
