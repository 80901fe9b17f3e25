//! Per-entity embedding cache keyed by text revision.
//!
//! An entry is only served when its revision tag matches the entity's
//! current revision. Editing an entity's text bumps the revision, which
//! silently retires the cached vector; the next ranking recomputes and
//! stores a fresh one. Stale write-backs from workers that raced an edit
//! can never surface.

use super::vector::Embedding;

#[derive(Debug, Clone)]
struct CachedEmbedding {
    embedding: Embedding,
    revision: u64,
}

/// Single-slot embedding cache for one entity.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingCache {
    slot: Option<CachedEmbedding>,
}

impl EmbeddingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached embedding if it was computed at `revision`.
    pub fn get(&self, revision: u64) -> Option<&Embedding> {
        self.slot
            .as_ref()
            .filter(|cached| cached.revision == revision)
            .map(|cached| &cached.embedding)
    }

    /// Stores an embedding computed at `revision`.
    ///
    /// An entry tagged with a newer revision is never replaced by an older
    /// one, so late write-backs cannot evict a fresh entry.
    pub fn store(&mut self, embedding: Embedding, revision: u64) {
        match &self.slot {
            Some(existing) if existing.revision > revision => {}
            _ => self.slot = Some(CachedEmbedding { embedding, revision }),
        }
    }
}
