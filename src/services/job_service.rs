//! Job listing and creation, synced against the remote matching service.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::Job;
use crate::embedding::{EmbeddingError, Encoder};
use crate::providers::matching::{JobDraft, MatchingProvider};
use crate::storage::MemoryStore;

/// Errors that can occur during job operations.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

/// Result type for job operations.
pub type Result<T> = std::result::Result<T, JobError>;

/// Manages the job roster.
///
/// Reads prefer the remote service and mirror its rows into the local
/// store, so a later offline call still sees the freshest data that ever
/// arrived. Writes go remote-first with a local fallback.
pub struct JobService {
    provider: Option<Arc<dyn MatchingProvider>>,
    store: Arc<MemoryStore>,
    encoder: Encoder,
}

impl JobService {
    /// Creates a local-only job service.
    pub fn new(store: Arc<MemoryStore>, encoder: Encoder) -> Self {
        Self {
            provider: None,
            store,
            encoder,
        }
    }

    /// Attaches a remote matching provider.
    pub fn with_provider(mut self, provider: Arc<dyn MatchingProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Lists jobs, remote order when the service answers, store order
    /// otherwise. Never fails; a dead provider degrades to local data.
    pub async fn list(&self) -> Vec<Job> {
        if let Some(provider) = &self.provider {
            match provider.fetch_jobs().await {
                Ok(records) => {
                    let jobs: Vec<Job> = records
                        .into_iter()
                        .map(|record| record.into_job(self.encoder.dimension()))
                        .collect();
                    for job in &jobs {
                        self.store.upsert_job(job.clone()).await;
                    }
                    return jobs;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch jobs via provider: {}", e);
                }
            }
        }

        self.store.jobs().await
    }

    /// Creates a job from a draft.
    ///
    /// The remote service assigns the id when reachable; otherwise the job
    /// is created locally with a generated id. Either way the stored job
    /// ends up with a current embedding, so the first match against it
    /// does not pay the encoding cost.
    pub async fn create(&self, draft: JobDraft) -> Result<Job> {
        if let Some(provider) = &self.provider {
            match provider.create_job(&draft).await {
                Ok(record) => {
                    let mut job = record.into_job(self.encoder.dimension());
                    if job.embedding().is_none() {
                        let embedding = self.encoder.encode(&job.embedding_text())?;
                        job.store_embedding(embedding, job.revision());
                    }
                    self.store.upsert_job(job.clone()).await;
                    return Ok(job);
                }
                Err(e) => {
                    tracing::warn!("Failed to create job via provider: {}", e);
                }
            }
        }

        let mut job = Job::new(draft.title, draft.description);
        let embedding = self.encoder.encode(&job.embedding_text())?;
        job.store_embedding(embedding, job.revision());
        self.store.insert_job(job.clone()).await;
        Ok(job)
    }
}
