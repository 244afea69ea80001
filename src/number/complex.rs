//! Arbitrary-precision complex numbers.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use bigdecimal::{BigDecimal, Context};
use num_traits::{One, Zero};

use crate::context;

/// An immutable complex number `a + bi` with arbitrary-precision decimal
/// components.
///
/// Every operation returns a fresh value; operands are never mutated. Each
/// inexact operation exists in two named forms: the plain form computes with
/// the operands' natural scales (no rounding), the `_with` form rounds
/// intermediate results to a caller-supplied [`Context`].
///
/// Equality is numeric: `1.0 + 2.00i` equals `1 + 2i`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigComplex {
    real: BigDecimal,
    imaginary: BigDecimal,
}

impl BigComplex {
    /// Creates the complex number `real + imaginary*i`.
    #[must_use]
    pub fn new(real: BigDecimal, imaginary: BigDecimal) -> Self {
        Self { real, imaginary }
    }

    /// The real part.
    #[must_use]
    pub fn real(&self) -> &BigDecimal {
        &self.real
    }

    /// The imaginary part.
    #[must_use]
    pub fn imaginary(&self) -> &BigDecimal {
        &self.imaginary
    }

    /// Component-wise sum, at the operands' natural scales.
    #[must_use]
    pub fn add(&self, summand: &Self) -> Self {
        Self::new(&self.real + &summand.real, &self.imaginary + &summand.imaginary)
    }

    /// Component-wise sum with each component rounded to `ctx`.
    #[must_use]
    pub fn add_with(&self, summand: &Self, ctx: &Context) -> Self {
        Self::new(
            context::round(ctx, &self.real + &summand.real),
            context::round(ctx, &self.imaginary + &summand.imaginary),
        )
    }

    /// Component-wise difference, at the operands' natural scales.
    #[must_use]
    pub fn subtract(&self, subtrahend: &Self) -> Self {
        Self::new(
            &self.real - &subtrahend.real,
            &self.imaginary - &subtrahend.imaginary,
        )
    }

    /// Component-wise difference with each component rounded to `ctx`.
    #[must_use]
    pub fn subtract_with(&self, subtrahend: &Self, ctx: &Context) -> Self {
        Self::new(
            context::round(ctx, &self.real - &subtrahend.real),
            context::round(ctx, &self.imaginary - &subtrahend.imaginary),
        )
    }

    /// Complex product `(ac - bd) + (ad + bc)i`, unrounded.
    #[must_use]
    pub fn multiply(&self, factor: &Self) -> Self {
        let ac = &self.real * &factor.real;
        let bd = &self.imaginary * &factor.imaginary;
        let ad = &self.real * &factor.imaginary;
        let bc = &self.imaginary * &factor.real;
        Self::new(ac - bd, ad + bc)
    }

    /// Complex product with every intermediate rounded to `ctx`.
    ///
    /// All four partial products and both component sums are rounded, not
    /// just the final components, so the working precision stays bounded by
    /// the context even inside a single multiplication.
    #[must_use]
    pub fn multiply_with(&self, factor: &Self, ctx: &Context) -> Self {
        let ac = context::round(ctx, &self.real * &factor.real);
        let bd = context::round(ctx, &self.imaginary * &factor.imaginary);
        let ad = context::round(ctx, &self.real * &factor.imaginary);
        let bc = context::round(ctx, &self.imaginary * &factor.real);
        Self::new(context::round(ctx, ac - bd), context::round(ctx, ad + bc))
    }

    /// Additive inverse. Exact: negation never rounds.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(-&self.real, -&self.imaginary)
    }

    /// Additive inverse, context form for API symmetry. Negation is exact,
    /// so the context has no effect on the result.
    #[must_use]
    pub fn negate_with(&self, _ctx: &Context) -> Self {
        self.negate()
    }

    /// Complex conjugate `a - bi`. Exact.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.real.clone(), -&self.imaginary)
    }

    /// Squared magnitude `a² + b²`. Exact, no square root involved.
    #[must_use]
    pub fn abs_pow2(&self) -> BigDecimal {
        &self.real * &self.real + &self.imaginary * &self.imaginary
    }

    /// Magnitude `sqrt(a² + b²)` at the decimal library's default square-root
    /// precision (100 significant digits).
    #[must_use]
    pub fn abs(&self) -> BigDecimal {
        // A sum of two squares is nonnegative, so the root always exists.
        self.abs_pow2()
            .sqrt()
            .expect("square root of a nonnegative value")
    }

    /// Magnitude with the square root computed under `ctx`.
    #[must_use]
    pub fn abs_with(&self, ctx: &Context) -> BigDecimal {
        self.abs_pow2()
            .sqrt_with_context(ctx)
            .expect("square root of a nonnegative value")
    }

    /// Raises to a nonnegative integer power by repeated multiplication,
    /// unrounded. `pow(0)` is one and `pow(1)` returns the value itself.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.multiply(self);
        }
        result
    }

    /// Raises to a nonnegative integer power by repeated context-aware
    /// multiplication: the rounding propagation is identical to a chain of
    /// `exponent - 1` [`BigComplex::multiply_with`] calls.
    #[must_use]
    pub fn pow_with(&self, exponent: u32, ctx: &Context) -> Self {
        if exponent == 0 {
            return Self::one();
        }
        let mut result = self.clone();
        for _ in 1..exponent {
            result = result.multiply_with(self, ctx);
        }
        result
    }
}

impl Zero for BigComplex {
    fn zero() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::zero())
    }

    fn is_zero(&self) -> bool {
        self.real.is_zero() && self.imaginary.is_zero()
    }
}

impl One for BigComplex {
    fn one() -> Self {
        Self::new(BigDecimal::one(), BigDecimal::zero())
    }
}

impl Add for BigComplex {
    type Output = BigComplex;

    fn add(self, rhs: BigComplex) -> BigComplex {
        BigComplex::add(&self, &rhs)
    }
}

impl Add for &BigComplex {
    type Output = BigComplex;

    fn add(self, rhs: &BigComplex) -> BigComplex {
        BigComplex::add(self, rhs)
    }
}

impl Sub for BigComplex {
    type Output = BigComplex;

    fn sub(self, rhs: BigComplex) -> BigComplex {
        self.subtract(&rhs)
    }
}

impl Sub for &BigComplex {
    type Output = BigComplex;

    fn sub(self, rhs: &BigComplex) -> BigComplex {
        self.subtract(rhs)
    }
}

impl Mul for BigComplex {
    type Output = BigComplex;

    fn mul(self, rhs: BigComplex) -> BigComplex {
        self.multiply(&rhs)
    }
}

impl Mul for &BigComplex {
    type Output = BigComplex;

    fn mul(self, rhs: &BigComplex) -> BigComplex {
        self.multiply(rhs)
    }
}

impl Neg for BigComplex {
    type Output = BigComplex;

    fn neg(self) -> BigComplex {
        self.negate()
    }
}

impl Neg for &BigComplex {
    type Output = BigComplex;

    fn neg(self) -> BigComplex {
        self.negate()
    }
}

impl fmt::Display for BigComplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imaginary < BigDecimal::zero() {
            write!(f, "{}-{}i", self.real, self.imaginary.abs())
        } else {
            write!(f, "{}+{}i", self.real, self.imaginary)
        }
    }
}
