//! shortlist - A job and candidate matching toolkit
//!
//! This crate provides the core functionality for the shortlist matcher,
//! including deterministic text embeddings, candidate ranking, and remote
//! matching-service integration with a local fallback.

pub mod app;
pub mod config;
pub mod domain;
pub mod embedding;
pub mod providers;
pub mod services;
pub mod storage;

pub use app::App;
