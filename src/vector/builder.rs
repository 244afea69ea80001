//! Staged construction of validated vectors.

use std::collections::BTreeMap;

use crate::error::VectorError;
use crate::field::Field;
use crate::vector::generic::GenericVector;

/// Accumulates index-to-element assignments for a vector of a declared size
/// and finalizes them into an immutable [`GenericVector`].
///
/// Assignments have map semantics: putting an index twice replaces the
/// earlier element. [`VectorBuilder::build`] succeeds only once every index
/// in `0..size` is populated.
///
/// ```
/// use lineal::{BigComplex, BigDecimal, ComplexVector, VectorBuilder};
///
/// let mut builder = VectorBuilder::new(2)?;
/// builder.put(0, BigComplex::new(BigDecimal::from(1), BigDecimal::from(1)))?;
/// builder.put(1, BigComplex::new(BigDecimal::from(2), BigDecimal::from(0)))?;
/// let vector: ComplexVector = builder.build()?;
/// assert_eq!(vector.size(), 2);
/// # Ok::<(), lineal::VectorError>(())
/// ```
#[derive(Clone, Debug)]
pub struct VectorBuilder<E> {
    size: usize,
    entries: BTreeMap<usize, E>,
}

impl<E> VectorBuilder<E>
where
    E: Clone + PartialEq,
{
    /// Starts a builder for a vector of `size` elements.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidSize`] if `size` is zero.
    pub fn new(size: usize) -> Result<Self, VectorError> {
        if size < 1 {
            return Err(VectorError::InvalidSize(size));
        }
        Ok(Self { size, entries: BTreeMap::new() })
    }

    /// The declared size of the vector under construction.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Assigns `element` to `index`, replacing any earlier assignment.
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] if `index` is not in `0..size`.
    pub fn put(&mut self, index: usize, element: E) -> Result<&mut Self, VectorError> {
        if index >= self.size {
            return Err(VectorError::IndexOutOfRange { index, size: self.size });
        }
        self.entries.insert(index, element);
        Ok(self)
    }

    /// Finalizes the accumulated assignments into an immutable vector.
    ///
    /// # Errors
    ///
    /// [`VectorError::IncompleteVector`] naming the first unpopulated index
    /// if any index of `0..size` is still missing.
    pub fn build<F>(mut self) -> Result<GenericVector<E, F>, VectorError>
    where
        F: Field<E> + Default,
    {
        let mut elements = Vec::with_capacity(self.size);
        for index in 0..self.size {
            match self.entries.remove(&index) {
                Some(element) => elements.push(element),
                None => {
                    return Err(VectorError::IncompleteVector {
                        size: self.size,
                        missing: index,
                    });
                }
            }
        }
        Ok(GenericVector::from_parts(elements, F::default()))
    }
}
