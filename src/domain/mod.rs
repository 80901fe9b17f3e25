//! Domain layer types for the matcher.
//!
//! This module contains the core domain types used throughout the
//! application: job and candidate entities plus their identifier newtypes.

mod candidate;
mod job;
mod types;

pub use candidate::Candidate;
pub use job::Job;
pub use types::{CandidateId, JobId};
