//! In-memory entity store.
//!
//! Jobs and candidates live in insertion-ordered vectors behind async
//! read/write locks. Insertion order is load-bearing: the ranker breaks
//! score ties by pool order, so the store must hand candidates back in
//! the order they arrived.

use tokio::sync::RwLock;

use crate::domain::{Candidate, CandidateId, Job, JobId};
use crate::embedding::Embedding;

use super::seed;

/// Thread-safe in-memory store for jobs and candidates.
///
/// Reads hand out clones; callers edit their copy and write it back with
/// an upsert. Embedding write-backs go through the dedicated methods so
/// the revision tag travels with the vector.
#[derive(Debug, Default)]
pub struct MemoryStore {
    jobs: RwLock<Vec<Job>>,
    candidates: RwLock<Vec<Candidate>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with the built-in sample jobs and candidates.
    pub fn with_sample_data() -> Self {
        Self {
            jobs: RwLock::new(seed::sample_jobs()),
            candidates: RwLock::new(seed::sample_candidates()),
        }
    }

    /// Returns all jobs in insertion order.
    pub async fn jobs(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    /// Returns all candidates in insertion order.
    pub async fn candidates(&self) -> Vec<Candidate> {
        self.candidates.read().await.clone()
    }

    /// Looks up a job by id.
    pub async fn get_job(&self, id: &JobId) -> Option<Job> {
        self.jobs.read().await.iter().find(|j| &j.id == id).cloned()
    }

    /// Looks up a candidate by id.
    pub async fn get_candidate(&self, id: &CandidateId) -> Option<Candidate> {
        self.candidates
            .read()
            .await
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    /// Appends a job.
    pub async fn insert_job(&self, job: Job) {
        self.jobs.write().await.push(job);
    }

    /// Appends a candidate.
    pub async fn insert_candidate(&self, candidate: Candidate) {
        self.candidates.write().await.push(candidate);
    }

    /// Replaces the job with the same id in place, or appends it.
    ///
    /// Replacement keeps the original position so tie-break order stays
    /// stable across refreshes from the remote service.
    pub async fn upsert_job(&self, job: Job) {
        let mut jobs = self.jobs.write().await;
        match jobs.iter_mut().find(|j| j.id == job.id) {
            Some(existing) => *existing = job,
            None => jobs.push(job),
        }
    }

    /// Replaces the candidate with the same id in place, or appends it.
    pub async fn upsert_candidate(&self, candidate: Candidate) {
        let mut candidates = self.candidates.write().await;
        match candidates.iter_mut().find(|c| c.id == candidate.id) {
            Some(existing) => *existing = candidate,
            None => candidates.push(candidate),
        }
    }

    /// Attaches an embedding computed at `revision` to a stored job.
    ///
    /// A no-op when the job is unknown; the revision tag keeps a write-back
    /// that raced a text edit from ever being served.
    pub async fn store_job_embedding(&self, id: &JobId, embedding: Embedding, revision: u64) {
        let mut jobs = self.jobs.write().await;
        if let Some(job) = jobs.iter_mut().find(|j| &j.id == id) {
            job.store_embedding(embedding, revision);
        }
    }

    /// Attaches an embedding computed at `revision` to a stored candidate.
    pub async fn store_candidate_embedding(
        &self,
        id: &CandidateId,
        embedding: Embedding,
        revision: u64,
    ) {
        let mut candidates = self.candidates.write().await;
        if let Some(candidate) = candidates.iter_mut().find(|c| &c.id == id) {
            candidate.store_embedding(embedding, revision);
        }
    }

    /// Case-insensitive substring search over candidate names.
    ///
    /// A name that trims to empty matches everyone.
    pub async fn search_candidates(&self, name: &str) -> Vec<Candidate> {
        let candidates = self.candidates.read().await;
        if name.trim().is_empty() {
            return candidates.clone();
        }

        let needle = name.to_lowercase();
        candidates
            .iter()
            .filter(|c| c.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sample_data_seeds_three_of_each() {
        let store = MemoryStore::with_sample_data();
        assert_eq!(store.jobs().await.len(), 3);
        assert_eq!(store.candidates().await.len(), 3);
    }

    #[tokio::test]
    async fn jobs_keep_insertion_order() {
        let store = MemoryStore::new();
        store.insert_job(Job::with_id("a", "First", "d")).await;
        store.insert_job(Job::with_id("b", "Second", "d")).await;
        store.insert_job(Job::with_id("c", "Third", "d")).await;

        let ids: Vec<String> = store.jobs().await.iter().map(|j| j.id.0.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn get_job_by_id() {
        let store = MemoryStore::with_sample_data();

        let job = store.get_job(&JobId::from("2")).await.unwrap();
        assert_eq!(job.title(), "Avoca");

        assert!(store.get_job(&JobId::from("missing")).await.is_none());
    }

    #[tokio::test]
    async fn upsert_replaces_in_place() {
        let store = MemoryStore::new();
        store.insert_job(Job::with_id("a", "First", "d")).await;
        store.insert_job(Job::with_id("b", "Second", "d")).await;
        store.insert_job(Job::with_id("c", "Third", "d")).await;

        store.upsert_job(Job::with_id("b", "Second, revised", "d")).await;

        let jobs = store.jobs().await;
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[1].id, JobId::from("b"));
        assert_eq!(jobs[1].title(), "Second, revised");
    }

    #[tokio::test]
    async fn upsert_appends_unknown_id() {
        let store = MemoryStore::new();
        store.insert_candidate(Candidate::with_id("1", "A", "s")).await;

        store.upsert_candidate(Candidate::with_id("2", "B", "s")).await;
        assert_eq!(store.candidates().await.len(), 2);
    }

    #[tokio::test]
    async fn embedding_write_back_populates_cache() {
        let store = MemoryStore::with_sample_data();
        let id = JobId::from("1");

        let job = store.get_job(&id).await.unwrap();
        assert!(job.embedding().is_none());

        store
            .store_job_embedding(&id, Embedding::new(vec![1.0, 0.0]), job.revision())
            .await;

        let job = store.get_job(&id).await.unwrap();
        assert_eq!(job.embedding().unwrap().values, vec![1.0, 0.0]);
    }

    #[tokio::test]
    async fn stale_write_back_is_not_served() {
        let store = MemoryStore::with_sample_data();
        let id = JobId::from("1");

        // Snapshot, then edit the entity and write the edit back before the
        // embedding computed from the snapshot lands.
        let mut job = store.get_job(&id).await.unwrap();
        let snapshot = job.revision();
        job.set_description("Completely different role.");
        store.upsert_job(job).await;

        store
            .store_job_embedding(&id, Embedding::new(vec![1.0, 0.0]), snapshot)
            .await;

        assert!(store.get_job(&id).await.unwrap().embedding().is_none());
    }

    #[tokio::test]
    async fn write_back_for_unknown_id_is_a_noop() {
        let store = MemoryStore::new();
        store
            .store_candidate_embedding(
                &CandidateId::from("ghost"),
                Embedding::new(vec![1.0]),
                0,
            )
            .await;
        assert!(store.candidates().await.is_empty());
    }

    #[tokio::test]
    async fn search_empty_name_returns_everyone() {
        let store = MemoryStore::with_sample_data();
        assert_eq!(store.search_candidates("").await.len(), 3);
        assert_eq!(store.search_candidates("   ").await.len(), 3);
    }

    #[tokio::test]
    async fn search_is_case_insensitive_substring() {
        let store = MemoryStore::with_sample_data();

        let results = store.search_candidates("CELENA").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name(), "Celena Chang");

        let results = store.search_candidates("al").await;
        let names: Vec<&str> = results.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Alonso Koumba", "Calvin Goah"]);
    }

    #[tokio::test]
    async fn search_without_match_is_empty() {
        let store = MemoryStore::with_sample_data();
        assert!(store.search_candidates("zzz").await.is_empty());
    }
}
