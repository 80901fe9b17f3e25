//! Candidate roster management and name search.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::Candidate;
use crate::embedding::{EmbeddingError, Encoder};
use crate::providers::matching::{CandidateDraft, MatchingProvider};
use crate::storage::MemoryStore;

/// Errors that can occur during candidate operations.
#[derive(Debug, Error)]
pub enum CandidateError {
    #[error("Embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

/// Result type for candidate operations.
pub type Result<T> = std::result::Result<T, CandidateError>;

/// Manages the candidate roster.
///
/// Same shape as the job side: reads prefer the remote service and mirror
/// its rows locally, writes go remote-first with a local fallback.
pub struct CandidateService {
    provider: Option<Arc<dyn MatchingProvider>>,
    store: Arc<MemoryStore>,
    encoder: Encoder,
}

impl CandidateService {
    /// Creates a local-only candidate service.
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

    /// Lists candidates, remote order when the service answers, store
    /// order otherwise.
    pub async fn list(&self) -> Vec<Candidate> {
        if let Some(provider) = &self.provider {
            match provider.fetch_candidates().await {
                Ok(records) => {
                    let candidates: Vec<Candidate> = records
                        .into_iter()
                        .map(|record| record.into_candidate(self.encoder.dimension()))
                        .collect();
                    for candidate in &candidates {
                        self.store.upsert_candidate(candidate.clone()).await;
                    }
                    return candidates;
                }
                Err(e) => {
                    tracing::warn!("Failed to fetch candidates via provider: {}", e);
                }
            }
        }

        self.store.candidates().await
    }

    /// Creates a candidate from a draft.
    ///
    /// A row created remotely is adopted as-is; its embedding is computed
    /// on first match. A locally created row is embedded up front.
    pub async fn create(&self, draft: CandidateDraft) -> Result<Candidate> {
        if let Some(provider) = &self.provider {
            match provider.create_candidate(&draft).await {
                Ok(record) => {
                    let candidate = record.into_candidate(self.encoder.dimension());
                    self.store.upsert_candidate(candidate.clone()).await;
                    return Ok(candidate);
                }
                Err(e) => {
                    tracing::warn!("Failed to create candidate via provider: {}", e);
                }
            }
        }

        let mut candidate = Candidate::new(draft.name, draft.skills);
        let embedding = self.encoder.encode(&candidate.embedding_text())?;
        candidate.store_embedding(embedding, candidate.revision());
        self.store.insert_candidate(candidate.clone()).await;
        Ok(candidate)
    }

    /// Searches candidates by name, case-insensitive substring match.
    ///
    /// Remote hits are mirrored into the store before being returned. An
    /// empty query lists everyone.
    pub async fn search(&self, name: &str) -> Vec<Candidate> {
        if let Some(provider) = &self.provider {
            match provider.search_candidates(name).await {
                Ok(records) => {
                    let candidates: Vec<Candidate> = records
                        .into_iter()
                        .map(|record| record.into_candidate(self.encoder.dimension()))
                        .collect();
                    for candidate in &candidates {
                        self.store.upsert_candidate(candidate.clone()).await;
                    }
                    return candidates;
                }
                Err(e) => {
                    tracing::warn!("Failed to search candidates via provider: {}", e);
                }
            }
        }

        self.store.search_candidates(name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;

    use crate::domain::CandidateId;
    use crate::providers::matching::{
        CandidateRecord, JobDraft, JobRecord, MatchRequest, ProviderError, ProviderResult,
    };

    fn offline() -> ProviderError {
        ProviderError::ApiError {
            status: 503,
            message: "service unavailable".to_string(),
        }
    }

    fn candidate_record(id: &str, name: &str, skills: &str) -> CandidateRecord {
        CandidateRecord {
            id: CandidateId::from(id),
            name: name.to_string(),
            skills: skills.to_string(),
            embedding: None,
            created_at: Utc::now(),
        }
    }

    /// Provider with canned candidate responses; everything else fails.
    struct StubProvider {
        candidates: ProviderResult<Vec<CandidateRecord>>,
        created: ProviderResult<CandidateRecord>,
        found: ProviderResult<Vec<CandidateRecord>>,
    }

    impl StubProvider {
        fn failing() -> Self {
            Self {
                candidates: Err(offline()),
                created: Err(offline()),
                found: Err(offline()),
            }
        }

        fn listing(candidates: Vec<CandidateRecord>) -> Self {
            Self {
                candidates: Ok(candidates),
                ..Self::failing()
            }
        }

        fn creating(record: CandidateRecord) -> Self {
            Self {
                created: Ok(record),
                ..Self::failing()
            }
        }

        fn finding(records: Vec<CandidateRecord>) -> Self {
            Self {
                found: Ok(records),
                ..Self::failing()
            }
        }
    }

    fn clone_result<T: Clone>(result: &ProviderResult<T>) -> ProviderResult<T> {
        match result {
            Ok(value) => Ok(value.clone()),
            Err(_) => Err(offline()),
        }
    }

    #[async_trait]
    impl MatchingProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn fetch_jobs(&self) -> ProviderResult<Vec<JobRecord>> {
            Err(offline())
        }

        async fn create_job(&self, _draft: &JobDraft) -> ProviderResult<JobRecord> {
            Err(offline())
        }

        async fn fetch_candidates(&self) -> ProviderResult<Vec<CandidateRecord>> {
            clone_result(&self.candidates)
        }

        async fn create_candidate(
            &self,
            _draft: &CandidateDraft,
        ) -> ProviderResult<CandidateRecord> {
            clone_result(&self.created)
        }

        async fn match_candidates(
            &self,
            _request: &MatchRequest,
        ) -> ProviderResult<Vec<CandidateRecord>> {
            Err(offline())
        }

        async fn search_candidates(&self, _name: &str) -> ProviderResult<Vec<CandidateRecord>> {
            clone_result(&self.found)
        }
    }

    #[tokio::test]
    async fn local_list_returns_seed_candidates() {
        let service = CandidateService::new(
            Arc::new(MemoryStore::with_sample_data()),
            Encoder::with_defaults(),
        );

        let candidates = service.list().await;

        let ids: Vec<&str> = candidates.iter().map(|c| c.id.0.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn remote_list_is_mirrored_into_store() {
        let store = Arc::new(MemoryStore::with_sample_data());
        let provider = StubProvider::listing(vec![
            candidate_record("1", "Celena Chang", "Staff engineer now; React, TypeScript."),
            candidate_record("9", "Nadia Petrov", "Rust and distributed systems."),
        ]);
        let service = CandidateService::new(store.clone(), Encoder::with_defaults())
            .with_provider(Arc::new(provider));

        let candidates = service.list().await;
        assert_eq!(candidates.len(), 2);

        let stored = store.candidates().await;
        assert_eq!(stored.len(), 4);
        assert_eq!(stored[0].skills(), "Staff engineer now; React, TypeScript.");
        assert!(store
            .get_candidate(&CandidateId::from("9"))
            .await
            .is_some());
    }

    #[tokio::test]
    async fn failing_provider_lists_from_store() {
        let service = CandidateService::new(
            Arc::new(MemoryStore::with_sample_data()),
            Encoder::with_defaults(),
        )
        .with_provider(Arc::new(StubProvider::failing()));

        assert_eq!(service.list().await.len(), 3);
    }

    #[tokio::test]
    async fn local_create_assigns_id_and_embedding() {
        let store = Arc::new(MemoryStore::new());
        let service = CandidateService::new(store.clone(), Encoder::with_defaults());

        let candidate = service
            .create(CandidateDraft::new("Ada Osei", "Haskell and Rust."))
            .await
            .unwrap();

        assert!(!candidate.id.0.is_empty());
        assert!(candidate.embedding().is_some());
        assert!(store.get_candidate(&candidate.id).await.is_some());
    }

    #[tokio::test]
    async fn remote_create_defers_embedding() {
        let store = Arc::new(MemoryStore::new());
        let provider = StubProvider::creating(candidate_record("11", "Ada Osei", "Haskell."));
        let service = CandidateService::new(store.clone(), Encoder::with_defaults())
            .with_provider(Arc::new(provider));

        let candidate = service
            .create(CandidateDraft::new("Ada Osei", "Haskell."))
            .await
            .unwrap();

        assert_eq!(candidate.id, CandidateId::from("11"));
        assert!(candidate.embedding().is_none());
        assert!(store.get_candidate(&candidate.id).await.is_some());
    }

    #[tokio::test]
    async fn blank_draft_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        let service = CandidateService::new(store.clone(), Encoder::with_defaults());

        let result = service.create(CandidateDraft::new("", "")).await;

        assert!(matches!(
            result,
            Err(CandidateError::Embedding(EmbeddingError::EmptyInput))
        ));
        assert!(store.candidates().await.is_empty());
    }

    #[tokio::test]
    async fn failing_provider_searches_store() {
        let service = CandidateService::new(
            Arc::new(MemoryStore::with_sample_data()),
            Encoder::with_defaults(),
        )
        .with_provider(Arc::new(StubProvider::failing()));

        let found = service.search("al").await;

        let names: Vec<&str> = found.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Alonso Koumba", "Calvin Goah"]);
    }

    #[tokio::test]
    async fn remote_search_results_sync_into_store() {
        let store = Arc::new(MemoryStore::with_sample_data());
        let provider = StubProvider::finding(vec![candidate_record(
            "9",
            "Nadia Petrov",
            "Rust and distributed systems.",
        )]);
        let service = CandidateService::new(store.clone(), Encoder::with_defaults())
            .with_provider(Arc::new(provider));

        let found = service.search("nadia").await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Nadia Petrov");
        assert!(store
            .get_candidate(&CandidateId::from("9"))
            .await
            .is_some());
    }
}
