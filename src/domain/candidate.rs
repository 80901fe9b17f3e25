//! Candidate domain type.

use chrono::{DateTime, Utc};

use crate::embedding::{Embedding, EmbeddingCache};

use super::types::CandidateId;

/// A person who can be matched against open jobs.
///
/// Same revision discipline as [`crate::domain::Job`]: the name and skills
/// text sit behind setters that bump the revision, keeping the cached
/// embedding coherent with the text it was computed from.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Unique identifier for this candidate.
    pub id: CandidateId,
    /// When the candidate entered the system.
    pub created_at: DateTime<Utc>,
    name: String,
    skills: String,
    revision: u64,
    embedding: EmbeddingCache,
}

impl Candidate {
    /// Creates a new candidate with a generated id.
    pub fn new(name: impl Into<String>, skills: impl Into<String>) -> Self {
        Self::with_id(uuid::Uuid::new_v4().to_string(), name, skills)
    }

    /// Creates a candidate with a caller-supplied id.
    pub fn with_id(
        id: impl Into<CandidateId>,
        name: impl Into<String>,
        skills: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            name: name.into(),
            skills: skills.into(),
            revision: 0,
            embedding: EmbeddingCache::new(),
        }
    }

    /// Candidate's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form skills and background summary.
    pub fn skills(&self) -> &str {
        &self.skills
    }

    /// Replaces the name and retires any cached embedding.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.revision += 1;
    }

    /// Replaces the skills text and retires any cached embedding.
    pub fn set_skills(&mut self, skills: impl Into<String>) {
        self.skills = skills.into();
        self.revision += 1;
    }

    /// The text this candidate is embedded from.
    pub fn embedding_text(&self) -> String {
        format!("{} {}", self.name, self.skills)
    }

    /// Current text revision, bumped by every text edit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Cached embedding, if one was computed for the current text.
    pub fn embedding(&self) -> Option<&Embedding> {
        self.embedding.get(self.revision)
    }

    /// Stores an embedding computed while this candidate was at `revision`.
    pub fn store_embedding(&mut self, embedding: Embedding, revision: u64) {
        self.embedding.store(embedding, revision);
    }
}
