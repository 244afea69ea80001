//! Algebraic field descriptors.
//!
//! A [`Field`] is a stateless dispatch table for the arithmetic of a scalar
//! type: the two identities plus add, subtract, multiply, and negate. Vectors
//! carry a field value and route all element arithmetic through it, which
//! keeps the vector core agnostic of the element type without virtual
//! dispatch — implementations are zero-sized unit structs.
//!
//! The field axioms (associativity, distributivity, inverses) are a contract
//! on the implementer; this crate does not re-verify them. Implementations
//! must be deterministic: equal inputs produce equal outputs.

use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

use crate::number::BigComplex;

/// Arithmetic capabilities of a scalar type `E`.
pub trait Field<E>: Copy {
    /// Additive identity.
    fn zero(&self) -> E;
    /// Multiplicative identity.
    fn one(&self) -> E;
    /// Sum of `a` and `b`.
    fn add(&self, a: E, b: E) -> E;
    /// Difference of `a` and `b`.
    fn subtract(&self, a: E, b: E) -> E;
    /// Product of `a` and `b`.
    fn multiply(&self, a: E, b: E) -> E;
    /// Additive inverse of `a`.
    fn negate(&self, a: E) -> E;
}

/// The field of arbitrary-precision complex numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ComplexField;

impl Field<BigComplex> for ComplexField {
    fn zero(&self) -> BigComplex {
        BigComplex::zero()
    }

    fn one(&self) -> BigComplex {
        BigComplex::one()
    }

    fn add(&self, a: BigComplex, b: BigComplex) -> BigComplex {
        a + b
    }

    fn subtract(&self, a: BigComplex, b: BigComplex) -> BigComplex {
        a - b
    }

    fn multiply(&self, a: BigComplex, b: BigComplex) -> BigComplex {
        a * b
    }

    fn negate(&self, a: BigComplex) -> BigComplex {
        -a
    }
}

/// The field of arbitrary-precision real (decimal) numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecimalField;

impl Field<BigDecimal> for DecimalField {
    fn zero(&self) -> BigDecimal {
        BigDecimal::zero()
    }

    fn one(&self) -> BigDecimal {
        BigDecimal::one()
    }

    fn add(&self, a: BigDecimal, b: BigDecimal) -> BigDecimal {
        a + b
    }

    fn subtract(&self, a: BigDecimal, b: BigDecimal) -> BigDecimal {
        a - b
    }

    fn multiply(&self, a: BigDecimal, b: BigDecimal) -> BigDecimal {
        a * b
    }

    fn negate(&self, a: BigDecimal) -> BigDecimal {
        -a
    }
}
