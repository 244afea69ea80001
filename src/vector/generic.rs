//! The field-generic vector core.

use std::collections::BTreeMap;

use bigdecimal::{BigDecimal, Context};

use crate::error::VectorError;
use crate::field::Field;

/// Elements whose size can be measured as a nonnegative decimal magnitude.
///
/// This is the seam the norm algorithms rest on: a vector over any field can
/// compute its taxicab, Euclidean, and max norms as long as its elements can
/// report a magnitude.
pub trait Magnitude {
    /// The decimal type magnitudes are reported in.
    type Norm;

    /// Magnitude at default precision.
    fn magnitude(&self) -> Self::Norm;

    /// Magnitude rounded (and, where a square root is involved, computed)
    /// under the supplied context.
    fn magnitude_with(&self, ctx: &Context) -> Self::Norm;

    /// Squared magnitude, exact: no square root is taken.
    fn magnitude_pow2(&self) -> Self::Norm;
}

/// An immutable vector of `size >= 1` elements of `E`, densely indexed from
/// zero, carrying the [`Field`] descriptor that supplies its element
/// arithmetic.
///
/// All operations are pure: they allocate fresh results and never mutate the
/// receiver, so shared instances are safe to use from any number of threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenericVector<E, F> {
    entries: Vec<E>,
    field: F,
}

impl<E, F> GenericVector<E, F>
where
    E: Clone + PartialEq,
    F: Field<E> + Default,
{
    /// Builds a vector from its elements in index order.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidSize`] if `elements` is empty; a zero-length
    /// vector is invalid by construction.
    pub fn from_elements(elements: Vec<E>) -> Result<Self, VectorError> {
        if elements.is_empty() {
            return Err(VectorError::InvalidSize(0));
        }
        Ok(Self { entries: elements, field: F::default() })
    }

    /// Builds a vector from an index-to-element mapping. The key set must be
    /// exactly `{0, ..., len-1}`.
    ///
    /// # Errors
    ///
    /// [`VectorError::InvalidSize`] if the mapping is empty;
    /// [`VectorError::NonContiguousIndices`] if any index of the dense range
    /// is absent (in which case some key lies outside it).
    pub fn from_entries(mut entries: BTreeMap<usize, E>) -> Result<Self, VectorError> {
        let size = entries.len();
        if size == 0 {
            return Err(VectorError::InvalidSize(0));
        }
        let mut elements = Vec::with_capacity(size);
        for index in 0..size {
            match entries.remove(&index) {
                Some(element) => elements.push(element),
                None => {
                    return Err(VectorError::NonContiguousIndices {
                        expected: size,
                        missing: index,
                    });
                }
            }
        }
        Ok(Self { entries: elements, field: F::default() })
    }
}

impl<E, F> GenericVector<E, F>
where
    E: Clone + PartialEq,
    F: Field<E>,
{
    /// Crate-internal constructor for results of arithmetic, where the
    /// caller guarantees `entries` is non-empty.
    pub(crate) fn from_parts(entries: Vec<E>, field: F) -> Self {
        debug_assert!(!entries.is_empty());
        Self { entries, field }
    }

    /// Number of elements. At least 1 by construction.
    #[must_use]
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// The element at `index`.
    ///
    /// # Errors
    ///
    /// [`VectorError::IndexOutOfRange`] if `index >= size`.
    pub fn element(&self, index: usize) -> Result<&E, VectorError> {
        self.entries.get(index).ok_or(VectorError::IndexOutOfRange {
            index,
            size: self.entries.len(),
        })
    }

    /// Iterates the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.entries.iter()
    }

    /// The field descriptor this vector routes its arithmetic through.
    #[must_use]
    pub fn field(&self) -> F {
        self.field
    }

    pub(crate) fn check_equal_size<G>(&self, other: &GenericVector<E, G>) -> Result<(), VectorError> {
        if self.entries.len() == other.entries.len() {
            Ok(())
        } else {
            Err(VectorError::SizeMismatch {
                left: self.entries.len(),
                right: other.entries.len(),
            })
        }
    }

    /// Element-wise sum via the field's addition.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn add(&self, summand: &Self) -> Result<Self, VectorError> {
        self.check_equal_size(summand)?;
        let entries = self
            .entries
            .iter()
            .zip(&summand.entries)
            .map(|(a, b)| self.field.add(a.clone(), b.clone()))
            .collect();
        Ok(Self::from_parts(entries, self.field))
    }

    /// Element-wise difference via the field's subtraction.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn subtract(&self, subtrahend: &Self) -> Result<Self, VectorError> {
        self.check_equal_size(subtrahend)?;
        let entries = self
            .entries
            .iter()
            .zip(&subtrahend.entries)
            .map(|(a, b)| self.field.subtract(a.clone(), b.clone()))
            .collect();
        Ok(Self::from_parts(entries, self.field))
    }

    /// Sum of element-wise products, reduced left-to-right by the field's
    /// addition. For a singleton vector this is just the product of the two
    /// single elements.
    ///
    /// # Errors
    ///
    /// [`VectorError::SizeMismatch`] if the sizes differ.
    pub fn dot_product(&self, other: &Self) -> Result<E, VectorError> {
        self.check_equal_size(other)?;
        let product = self
            .entries
            .iter()
            .zip(&other.entries)
            .map(|(a, b)| self.field.multiply(a.clone(), b.clone()))
            .reduce(|acc, term| self.field.add(acc, term))
            .expect("vector holds at least one element");
        Ok(product)
    }

    /// The dot product of the vector with itself. Returns an element of the
    /// field, not a magnitude; take a square root for the Euclidean norm.
    #[must_use]
    pub fn euclidean_norm_pow2(&self) -> E {
        self.dot_product(self)
            .expect("a vector always matches its own size")
    }

    /// Multiplies every element by `scalar` via the field's multiplication.
    #[must_use]
    pub fn scalar_multiply(&self, scalar: &E) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|e| self.field.multiply(scalar.clone(), e.clone()))
            .collect();
        Self::from_parts(entries, self.field)
    }

    /// Negates every element. Exact for any field with exact negation.
    #[must_use]
    pub fn negate(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|e| self.field.negate(e.clone()))
            .collect();
        Self::from_parts(entries, self.field)
    }
}

impl<E, F> GenericVector<E, F>
where
    E: Magnitude<Norm = BigDecimal> + Clone + PartialEq,
    F: Field<E>,
{
    /// Taxicab (L1) norm: the sum of element magnitudes, reduced
    /// left-to-right at the elements' natural scales.
    #[must_use]
    pub fn taxicab_norm(&self) -> BigDecimal {
        self.entries
            .iter()
            .map(Magnitude::magnitude)
            .reduce(|acc, term| acc + term)
            .expect("vector holds at least one element")
    }

    /// Euclidean (L2) norm: one square root over the exact sum of squared
    /// magnitudes. The root is taken at the decimal library's default
    /// precision (100 significant digits).
    #[must_use]
    pub fn euclidean_norm(&self) -> BigDecimal {
        self.entries
            .iter()
            .map(Magnitude::magnitude_pow2)
            .reduce(|acc, term| acc + term)
            .expect("vector holds at least one element")
            .sqrt()
            .expect("sum of squared magnitudes is nonnegative")
    }

    /// Max (L∞) norm: the greatest element magnitude under the total decimal
    /// order. Ties are value-equal, so any maximal element gives the same
    /// result.
    #[must_use]
    pub fn max_norm(&self) -> BigDecimal {
        self.entries
            .iter()
            .map(Magnitude::magnitude)
            .max()
            .expect("vector holds at least one element")
    }
}

impl<'a, E, F> IntoIterator for &'a GenericVector<E, F> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
