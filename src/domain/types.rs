//! Core identifier types for domain entities.
//!
//! These newtype wrappers provide type safety for entity identifiers,
//! preventing accidental mixing of different ID types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JobId(pub String);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Unique identifier for a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub String);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CandidateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_id_display() {
        let id = JobId("job-42".to_string());
        assert_eq!(id.to_string(), "job-42");
    }

    #[test]
    fn job_id_equality() {
        let id1 = JobId::from("1");
        let id2 = JobId::from("1".to_string());
        assert_eq!(id1, id2);
    }

    #[test]
    fn candidate_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CandidateId::from("cand-1"));
        assert!(set.contains(&CandidateId::from("cand-1")));
    }

    #[test]
    fn candidate_id_from_str() {
        let id: CandidateId = "3".into();
        assert_eq!(id.0, "3");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&JobId::from("1")).unwrap();
        assert_eq!(json, "\"1\"");

        let id: CandidateId = serde_json::from_str("\"2\"").unwrap();
        assert_eq!(id, CandidateId::from("2"));
    }
}
