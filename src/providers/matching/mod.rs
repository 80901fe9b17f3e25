//! Matching service integration.
//!
//! This module provides a unified interface to the remote matching service
//! plus the HTTP implementation used in production. The service layer
//! treats the provider as best-effort: every remote call has a local
//! fallback.
//!
//! # Example
//!
//! ```rust,no_run
//! use shortlist::providers::matching::{
//!     HttpMatchingProvider, MatchRequest, MatchingProvider,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = HttpMatchingProvider::new("https://condidate-test-be.onrender.com")?;
//!
//! let request = MatchRequest::for_description("Backend Engineer; Go and Postgres.");
//! let matches = provider.match_candidates(&request).await?;
//! println!("{} candidates matched", matches.len());
//! # Ok(())
//! # }
//! ```

mod http;
mod traits;

pub use http::HttpMatchingProvider;
pub use traits::{
    CandidateDraft, CandidateRecord, JobDraft, JobRecord, MatchRequest, MatchingProvider,
    ProviderError, ProviderResult,
};
