//! Business services layer.
//!
//! This module contains the core services that orchestrate matching logic,
//! coordinating between the remote provider, storage, and domain types.
//!
//! # Architecture
//!
//! Services sit between the CLI and the infrastructure layer:
//!
//! ```text
//! CLI (commands, output)
//!          |
//!          v
//!    Services Layer  <-- You are here
//!          |
//!          v
//! Infrastructure (Matching provider, Storage)
//! ```
//!
//! # Services Overview
//!
//! - [`JobService`]: Lists and creates jobs, mirroring remote rows locally
//! - [`CandidateService`]: Lists, creates, and searches candidates
//! - [`MatchService`]: Ranks candidates for a job, remote-first with a
//!   deterministic local fallback
//!
//! Every remote call degrades to local data on failure, so the whole
//! surface keeps working offline.

mod candidate_service;
mod job_service;
mod match_service;

pub use candidate_service::{CandidateError, CandidateService};
pub use job_service::{JobError, JobService};
pub use match_service::{MatchError, MatchResult, MatchService};
