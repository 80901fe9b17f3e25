//! Match orchestration.
//!
//! The [`MatchService`] answers "who fits this job" by asking the remote
//! matching service first and ranking locally with the deterministic
//! encoder when the remote call fails. Both paths return at most `top_k`
//! candidates, best match first.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::{Candidate, JobId};
use crate::embedding::{rank_scored, Embedding, EmbeddingError, Encoder};
use crate::providers::matching::{CandidateRecord, MatchRequest, MatchingProvider};
use crate::storage::MemoryStore;

/// Errors that can occur during match operations.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

/// Result type for match operations.
pub type Result<T> = std::result::Result<T, MatchError>;

/// A matched candidate.
#[derive(Debug, Clone)]
pub struct MatchResult {
    pub candidate: Candidate,
    /// Dot-product similarity against the query. `None` when the remote
    /// service did the ranking; it does not report scores.
    pub score: Option<f64>,
}

/// Orchestrates matching across the remote service and the local ranker.
pub struct MatchService {
    provider: Option<Arc<dyn MatchingProvider>>,
    store: Arc<MemoryStore>,
    encoder: Encoder,
    top_k: usize,
}

impl MatchService {
    /// Creates a local-only match service.
    pub fn new(store: Arc<MemoryStore>, encoder: Encoder, top_k: usize) -> Self {
        Self {
            provider: None,
            store,
            encoder,
            top_k,
        }
    }

    /// Attaches a remote matching provider. Remote results take precedence;
    /// the local ranker becomes the fallback.
    pub fn with_provider(mut self, provider: Arc<dyn MatchingProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Matches candidates against a stored job.
    ///
    /// Tries the remote service first, attaching the job's title and
    /// description when the job is known locally so the service can match
    /// even if the id is missing on its side. On remote failure the local
    /// ranker takes over.
    ///
    /// # Returns
    ///
    /// At most `top_k` results, best match first. A job id unknown both
    /// remotely and locally yields an empty list rather than an error.
    pub async fn match_job(&self, id: &JobId) -> Result<Vec<MatchResult>> {
        if let Some(provider) = &self.provider {
            let mut request = MatchRequest::for_job(id.clone());
            if let Some(job) = self.store.get_job(id).await {
                request = request.with_details(job.title(), job.description());
            }

            match provider.match_candidates(&request).await {
                Ok(records) => return Ok(self.remote_results(records)),
                Err(e) => {
                    tracing::warn!("Failed to match job {} via provider: {}", id, e);
                }
            }
        }

        let job = match self.store.get_job(id).await {
            Some(job) => job,
            None => {
                tracing::warn!("Job {} not found locally for fallback matching", id);
                return Ok(Vec::new());
            }
        };

        let query = match job.embedding() {
            Some(embedding) => embedding.clone(),
            None => {
                let embedding = self.encoder.encode(&job.embedding_text())?;
                tracing::debug!("Computed embedding for job {}", job.id);
                self.store
                    .store_job_embedding(&job.id, embedding.clone(), job.revision())
                    .await;
                embedding
            }
        };

        self.rank_locally(&query).await
    }

    /// Matches candidates against an ad-hoc description with no stored job.
    pub async fn match_description(&self, description: &str) -> Result<Vec<MatchResult>> {
        if let Some(provider) = &self.provider {
            let request = MatchRequest::for_description(description);
            match provider.match_candidates(&request).await {
                Ok(records) => return Ok(self.remote_results(records)),
                Err(e) => {
                    tracing::warn!("Failed to match description via provider: {}", e);
                }
            }
        }

        let query = self.encoder.encode(description)?;
        self.rank_locally(&query).await
    }

    /// Ranks every stored candidate against the query embedding.
    ///
    /// Candidates without a cached embedding are encoded here and the
    /// vector written back, so each text is embedded once per revision.
    async fn rank_locally(&self, query: &Embedding) -> Result<Vec<MatchResult>> {
        let candidates = self.store.candidates().await;

        let mut pool = Vec::with_capacity(candidates.len());
        for (index, candidate) in candidates.iter().enumerate() {
            let embedding = match candidate.embedding() {
                Some(embedding) => embedding.clone(),
                None => {
                    let embedding = self.encoder.encode(&candidate.embedding_text())?;
                    tracing::debug!("Computed embedding for candidate {}", candidate.id);
                    self.store
                        .store_candidate_embedding(
                            &candidate.id,
                            embedding.clone(),
                            candidate.revision(),
                        )
                        .await;
                    embedding
                }
            };
            pool.push((index, embedding));
        }

        let ranked = rank_scored(query, &pool, self.top_k)?;

        Ok(ranked
            .into_iter()
            .map(|(index, score)| MatchResult {
                candidate: candidates[index].clone(),
                score: Some(score),
            })
            .collect())
    }

    /// Converts remote match records, trimming to `top_k`.
    ///
    /// The remote service is trusted to have ranked; order is preserved.
    fn remote_results(&self, records: Vec<CandidateRecord>) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = records
            .into_iter()
            .map(|record| MatchResult {
                candidate: record.into_candidate(self.encoder.dimension()),
                score: None,
            })
            .collect();
        results.truncate(self.top_k);
        results
    }
}
