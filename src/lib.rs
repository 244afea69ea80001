//! Arbitrary-precision linear algebra over generic algebraic fields.
//!
//! Vectors are immutable, densely indexed from zero, and parametric over an
//! element type together with a stateless [`Field`] descriptor supplying the
//! element arithmetic. The concrete workhorse is [`ComplexVector`], whose
//! elements are [`BigComplex`] numbers built on [`BigDecimal`] components.
//!
//! Every multi-step operation exists in two named forms: a default-precision
//! form (`dot_product`, `euclidean_norm`, ...) that performs natural,
//! unrounded decimal arithmetic, and an explicit `_with` form that takes a
//! [`Context`] (digit precision plus rounding mode) and rounds at every
//! intermediate step, bounding precision growth.

mod context;
mod error;
mod field;
mod number;
mod vector;

pub use bigdecimal::BigDecimal;

pub use context::{Context, RoundingMode, round};
pub use error::VectorError;
pub use field::{ComplexField, DecimalField, Field};
pub use number::BigComplex;
pub use vector::{ComplexVector, DecimalVector, GenericVector, Magnitude, VectorBuilder};
