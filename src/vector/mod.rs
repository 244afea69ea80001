//! Immutable, densely indexed vectors over a generic field.

mod builder;
mod complex;
mod decimal;
mod generic;

pub use builder::VectorBuilder;
pub use complex::ComplexVector;
pub use decimal::DecimalVector;
pub use generic::{GenericVector, Magnitude};
