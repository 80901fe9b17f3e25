//! Built-in sample data.
//!
//! The same three jobs and three candidates the deployed service ships
//! with, so local fallback behavior matches what users see online.
//! Embeddings are not precomputed here; the first match populates them
//! through the normal write-back path.

use crate::domain::{Candidate, Job};

pub(super) fn sample_jobs() -> Vec<Job> {
    vec![
        Job::with_id(
            "1",
            "Sieve",
            "Product involving SDK development; uses Next.js, Python, Redis.",
        ),
        Job::with_id(
            "2",
            "Avoca",
            "Company focused on AI Agents; stack includes PostgreSQL and cloud services.",
        ),
        Job::with_id(
            "3",
            "Koodos",
            "Platform for data pipelines; uses Kafka and ClickHouse.",
        ),
    ]
}

pub(super) fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate::with_id(
            "1",
            "Celena Chang",
            "Formerly at Flatiron Health; expert in React, TypeScript, PostgreSQL; CS grad from UC Berkeley.",
        ),
        Candidate::with_id(
            "2",
            "Alonso Koumba",
            "Ex-Google engineer; expert in Python and PostgreSQL; CS grad from Stanford.",
        ),
        Candidate::with_id(
            "3",
            "Calvin Goah",
            "Engineer at IXL Learning; skilled in Node.js, React, PostgreSQL; CS grad from Columbia.",
        ),
    ]
}
