//! Unit-length word vectors
//!
//! An Embedding is an L2-normalized vector associated with one word. Cosine
//! similarity between two embeddings reduces to their dot product.

/// An L2-normalized word vector
#[derive(Debug, Clone, PartialEq)]
pub struct Embedding {
    values: Vec<f64>,
}

impl Embedding {
    /// Normalize a raw vector to unit length
    ///
    /// Returns `None` if the vector is empty, has zero norm, or contains
    /// non-finite values.
    ///
    /// # Examples
    /// ```
    /// use datahunt::core::Embedding;
    ///
    /// let e = Embedding::normalized(vec![3.0, 4.0]).unwrap();
    /// assert!((e.values()[0] - 0.6).abs() < 1e-12);
    /// assert!(Embedding::normalized(vec![0.0, 0.0]).is_none());
    /// ```
    #[must_use]
    pub fn normalized(mut values: Vec<f64>) -> Option<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return None;
        }

        let norm = l2_norm(&values);
        if norm <= f64::EPSILON {
            return None;
        }

        for v in &mut values {
            *v /= norm;
        }
        Some(Self { values })
    }

    /// Number of dimensions
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// The vector components
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Euclidean norm (1.0 up to rounding)
    #[must_use]
    pub fn norm(&self) -> f64 {
        l2_norm(&self.values)
    }

    /// Cosine similarity in `[-1, 1]`
    ///
    /// Vectors of different dimensionality are unrelated and score 0.
    #[must_use]
    pub fn cosine(&self, other: &Self) -> f64 {
        if self.values.len() != other.values.len() {
            return 0.0;
        }

        let norms = self.norm() * other.norm();
        if norms <= f64::EPSILON {
            return 0.0;
        }

        dot(&self.values, &other.values) / norms
    }

    /// Cosine similarity scaled to a percentage
    #[must_use]
    pub fn similarity(&self, other: &Self) -> f64 {
        self.cosine(other) * 100.0
    }
}

/// Dot product over the common prefix of two slices
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Euclidean norm of a slice
pub(crate) fn l2_norm(values: &[f64]) -> f64 {
    values.iter().map(|v| v * v).sum::<f64>().sqrt()
}
