//! Local storage layer.
//!
//! This module provides the in-memory store that backs every local
//! fallback path: entity lookup, insertion-ordered listing, name search,
//! and revision-tagged embedding write-backs.

mod memory;
mod seed;

pub use memory::MemoryStore;
