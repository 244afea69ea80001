//! Arbitrary-precision scalar number types.

mod complex;

pub use complex::BigComplex;
