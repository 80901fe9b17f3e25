//! Similarity ranking over embeddings.
//!
//! Scores are plain dot products. Every embedding leaving the encoder is
//! unit-normalized, so the dot product already equals cosine similarity and
//! no second normalization pass happens here.

use super::encoder::Encoder;
use super::vector::{Embedding, EmbeddingError, Result};

/// Default number of matches a ranking returns.
pub const DEFAULT_TOP_K: usize = 3;

/// Ranks candidates against a query embedding, best match first.
///
/// Returns at most `k` `(id, score)` pairs in descending score order. The
/// sort is stable, so candidates with equal scores keep their input order.
/// A `k` larger than the pool returns the whole pool; an empty pool returns
/// an empty ranking.
pub fn rank_scored<I: Clone>(
    query: &Embedding,
    candidates: &[(I, Embedding)],
    k: usize,
) -> Result<Vec<(I, f64)>> {
    if k == 0 {
        return Err(EmbeddingError::InvalidK { k });
    }

    let mut scored = Vec::with_capacity(candidates.len());
    for (id, embedding) in candidates {
        let score = query.dot(embedding)?;
        scored.push((id.clone(), score));
    }

    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);

    Ok(scored)
}

/// Like [`rank_scored`], dropping the scores.
pub fn rank<I: Clone>(
    query: &Embedding,
    candidates: &[(I, Embedding)],
    k: usize,
) -> Result<Vec<I>> {
    Ok(rank_scored(query, candidates, k)?
        .into_iter()
        .map(|(id, _)| id)
        .collect())
}

/// Encodes a query text and a pool of candidate texts, then ranks.
///
/// Convenience for callers holding raw texts instead of precomputed
/// embeddings. Any text the encoder rejects fails the whole call.
pub fn match_top_k<I: Clone>(
    encoder: &Encoder,
    query_text: &str,
    candidates: &[(I, &str)],
    k: usize,
) -> Result<Vec<(I, f64)>> {
    if k == 0 {
        return Err(EmbeddingError::InvalidK { k });
    }

    let query = encoder.encode(query_text)?;
    let mut encoded = Vec::with_capacity(candidates.len());
    for (id, text) in candidates {
        encoded.push((id.clone(), encoder.encode(text)?));
    }

    rank_scored(&query, &encoded, k)
}
