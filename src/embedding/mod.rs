//! Deterministic embeddings and similarity ranking.
//!
//! This module is the local stand-in for the remote matching service: a
//! cheap character-level encoder plus a dot-product ranker that produce
//! the same ordering on every run, with no model download and no network.
//!
//! # Architecture
//!
//! - [`Encoder`] - Folds text into fixed-length unit vectors
//! - [`rank_scored`] - Orders a candidate pool by dot-product similarity
//! - [`EmbeddingCache`] - Revision-tagged single-entity cache
//! - [`Embedding`] - A vector with the shared math on it
//!
//! # Example
//!
//! ```ignore
//! use shortlist::embedding::{match_top_k, Encoder};
//!
//! let encoder = Encoder::with_defaults();
//! let ranked = match_top_k(
//!     &encoder,
//!     "Backend Engineer Go Postgres",
//!     &[("1", "Go and Postgres background"), ("2", "Frontend React")],
//!     3,
//! )?;
//! ```

mod cache;
mod encoder;
mod ranker;
mod vector;

pub use cache::EmbeddingCache;
pub use encoder::{Encoder, EncoderConfig, DEFAULT_DIMENSION};
pub use ranker::{match_top_k, rank, rank_scored, DEFAULT_TOP_K};
pub use vector::{Embedding, EmbeddingError};
