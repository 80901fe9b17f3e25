//! Matching provider trait and wire types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Candidate, CandidateId, Job, JobId};
use crate::embedding::Embedding;

/// Errors that can occur talking to the matching service.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// A job as the matching service represents it on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub description: String,
    /// Present when the service has already embedded the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,
    /// Services that omit the timestamp get the receive time.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl JobRecord {
    /// Converts into a domain job, adopting the wire embedding when its
    /// length matches the local encoder dimension. A vector of any other
    /// length is dropped and recomputed locally on demand.
    pub fn into_job(self, dimension: usize) -> Job {
        let mut job = Job::with_id(self.id, self.title, self.description);
        job.created_at = self.created_at;
        if let Some(values) = self.embedding {
            if values.len() == dimension {
                job.store_embedding(Embedding::new(values), job.revision());
            }
        }
        job
    }
}

/// A candidate as the matching service represents it on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: CandidateId,
    pub name: String,
    pub skills: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f64>>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl CandidateRecord {
    /// Converts into a domain candidate, adopting the wire embedding when
    /// its length matches the local encoder dimension.
    pub fn into_candidate(self, dimension: usize) -> Candidate {
        let mut candidate = Candidate::with_id(self.id, self.name, self.skills);
        candidate.created_at = self.created_at;
        if let Some(values) = self.embedding {
            if values.len() == dimension {
                candidate.store_embedding(Embedding::new(values), candidate.revision());
            }
        }
        candidate
    }
}

/// Payload for creating a job. The service assigns id and timestamp.
#[derive(Debug, Clone, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub description: String,
}

impl JobDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Payload for creating a candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateDraft {
    pub name: String,
    pub skills: String,
}

impl CandidateDraft {
    pub fn new(name: impl Into<String>, skills: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: skills.into(),
        }
    }
}

/// Body of a match request.
///
/// The service accepts a job id it already knows, an inline
/// title/description pair, or both. Field names follow the service's
/// JSON convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<JobId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,
}

impl MatchRequest {
    /// Requests matching for a job the service knows by id.
    pub fn for_job(id: impl Into<JobId>) -> Self {
        Self {
            job_id: Some(id.into()),
            job_title: None,
            job_description: None,
        }
    }

    /// Requests matching for an ad-hoc description with no stored job.
    pub fn for_description(description: impl Into<String>) -> Self {
        Self {
            job_id: None,
            job_title: None,
            job_description: Some(description.into()),
        }
    }

    /// Attaches locally known job details so the service can still match
    /// when the id is missing on its side.
    pub fn with_details(
        mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.job_title = Some(title.into());
        self.job_description = Some(description.into());
        self
    }
}

/// Trait for matching service backends.
#[async_trait]
pub trait MatchingProvider: Send + Sync {
    /// Returns the provider's name (e.g., "http").
    fn name(&self) -> &str;

    /// Fetches all jobs known to the service.
    async fn fetch_jobs(&self) -> ProviderResult<Vec<JobRecord>>;

    /// Creates a job and returns the stored record.
    async fn create_job(&self, draft: &JobDraft) -> ProviderResult<JobRecord>;

    /// Fetches all candidates known to the service.
    async fn fetch_candidates(&self) -> ProviderResult<Vec<CandidateRecord>>;

    /// Creates a candidate and returns the stored record.
    async fn create_candidate(&self, draft: &CandidateDraft) -> ProviderResult<CandidateRecord>;

    /// Matches candidates against a job, best match first.
    async fn match_candidates(&self, request: &MatchRequest)
        -> ProviderResult<Vec<CandidateRecord>>;

    /// Searches candidates by name.
    async fn search_candidates(&self, name: &str) -> ProviderResult<Vec<CandidateRecord>>;
}
