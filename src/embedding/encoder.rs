//! Deterministic text encoder.
//!
//! Maps a text to a fixed-length unit vector by folding character code
//! points into position-indexed buckets. This is not a semantic embedding:
//! the remote matching service owns the real model. The local encoder only
//! has to be cheap, deterministic, and stable so that fallback rankings are
//! reproducible across calls and process restarts.

use super::vector::{Embedding, EmbeddingError, Result};

/// Default number of buckets in an encoded vector.
pub const DEFAULT_DIMENSION: usize = 64;

/// Each character contributes `code_point / CHAR_CODE_SCALE` to its bucket.
/// Changing this constant changes every embedding ever produced.
const CHAR_CODE_SCALE: f64 = 100.0;

/// Configuration for the encoder.
#[derive(Debug, Clone)]
pub struct EncoderConfig {
    /// Embedding dimension. All embeddings that are compared against each
    /// other must come from encoders configured with the same value.
    pub dimension: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            dimension: DEFAULT_DIMENSION,
        }
    }
}

/// Deterministic bag-of-characters encoder.
///
/// Pure function of the input text: no hidden state, no randomness, no I/O,
/// no clock. The same text always encodes to the identical vector.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Creates an encoder with the given configuration.
    ///
    /// A zero dimension is clamped to 1.
    pub fn new(config: EncoderConfig) -> Self {
        let mut config = config;
        config.dimension = config.dimension.max(1);
        Self { config }
    }

    /// Creates an encoder with the default 64-bucket configuration.
    pub fn with_defaults() -> Self {
        Self::new(EncoderConfig::default())
    }

    /// Returns the dimension of the vectors this encoder produces.
    pub fn dimension(&self) -> usize {
        self.config.dimension
    }

    /// Encodes a text into a unit-normalized embedding.
    ///
    /// Characters are taken in order; the character at position `i` adds its
    /// code point divided by 100 into bucket `i % dimension`. The
    /// accumulated vector is then L2-normalized, so `‖encode(t)‖ == 1` for
    /// every accepted input.
    ///
    /// Fails with [`EmbeddingError::EmptyInput`] when the text trims to the
    /// empty string. The trim is only the emptiness test; accumulation runs
    /// over the text exactly as given, untrimmed.
    pub fn encode(&self, text: &str) -> Result<Embedding> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let mut values = vec![0.0f64; self.config.dimension];
        for (i, ch) in text.chars().enumerate() {
            values[i % self.config.dimension] += f64::from(ch as u32) / CHAR_CODE_SCALE;
        }

        let norm = values.iter().map(|x| x * x).sum::<f64>().sqrt();
        if norm == 0.0 {
            // Reachable only through degenerate input such as all-NUL text.
            return Err(EmbeddingError::EmptyInput);
        }

        for value in &mut values {
            *value /= norm;
        }

        Ok(Embedding::new(values))
    }
}
