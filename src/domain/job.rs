//! Job posting domain type.

use chrono::{DateTime, Utc};

use crate::embedding::{Embedding, EmbeddingCache};

use super::types::JobId;

/// An open role that candidates are matched against.
///
/// The title and description are private behind accessors because the
/// cached embedding is only valid for the text it was computed from:
/// every text edit bumps the revision counter, which retires the cache
/// entry until a fresh embedding is stored.
#[derive(Debug, Clone)]
pub struct Job {
    /// Unique identifier for this job.
    pub id: JobId,
    /// When the job entered the system.
    pub created_at: DateTime<Utc>,
    title: String,
    description: String,
    revision: u64,
    embedding: EmbeddingCache,
}

impl Job {
    /// Creates a new job with a generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), title, description)
    }

    /// Creates a job with a caller-supplied id, typically one assigned by
    /// the remote matching service.
    pub fn with_id(
        id: impl Into<JobId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            title: title.into(),
            description: description.into(),
            revision: 0,
            embedding: EmbeddingCache::new(),
        }
    }

    /// Job title as shown to users.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-form description of the role.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the title and retires any cached embedding.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.revision += 1;
    }

    /// Replaces the description and retires any cached embedding.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.revision += 1;
    }

    /// The text this job is embedded from.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Current text revision, bumped by every text edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Cached embedding, if one was computed for the current text.
    pub fn embedding(&self) -> Option<&Embedding> {
        self.embedding.get(self.revision)
    }

    /// Stores an embedding computed while this job was at `revision`.
    ///
    /// A write-back that raced a text edit arrives with a stale tag and is
    /// never served.
    pub fn store_embedding(&mut self, embedding: Embedding, revision: u64) {
        self.embedding.store(embedding, revision);
    }
}
