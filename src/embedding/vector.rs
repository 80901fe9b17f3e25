//! Embedding vectors and shared vector math.
//!
//! An [`Embedding`] is a fixed-length `f64` vector. Every pair of embeddings
//! that is ever compared must share one dimension; a mismatch is rejected as
//! an error rather than silently scored as zero.

use thiserror::Error;

/// Errors produced by the encoding and ranking core.
///
/// These are all local validation failures surfaced to the immediate caller.
/// Transport failures from the remote matching service never appear here;
/// the service layer handles those and falls back to this core.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The input text trimmed to the empty string, or carried no signal at
    /// all (for example a string of NUL characters).
    #[error("cannot encode empty text")]
    EmptyInput,

    /// Two embeddings of different lengths were compared.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A non-positive top-K was requested.
    #[error("top-k must be positive, got {k}")]
    InvalidK { k: usize },
}

/// Result type for embedding operations.
pub type Result<T> = std::result::Result<T, EmbeddingError>;

/// A fixed-length vector representation of a text.
#[derive(Debug, Clone)]
pub struct Embedding {
    /// The embedding vector.
    pub values: Vec<f64>,
}

impl Embedding {
    /// Creates a new embedding from a vector of values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Returns the dimensionality of this embedding.
    pub fn dimension(&self) -> usize {
        self.values.len()
    }

    /// Euclidean (L2) norm.
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|x| x * x).sum::<f64>().sqrt()
    }

    /// Dot product with another embedding of the same dimension.
    ///
    /// For two unit-normalized embeddings this equals their cosine
    /// similarity. Embeddings that did not come out of the encoder's
    /// normalization step carry no such guarantee; interpreting the score as
    /// a cosine is then the caller's responsibility.
    pub fn dot(&self, other: &Embedding) -> Result<f64> {
        if self.values.len() != other.values.len() {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.values.len(),
                actual: other.values.len(),
            });
        }

        Ok(self
            .values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum())
    }
}
