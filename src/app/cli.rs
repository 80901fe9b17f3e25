use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "shortlist",
    about = "Job and candidate matching over deterministic embeddings",
    version
)]
pub struct Cli {
    /// Base URL of the matching service
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Skip the remote service and work from local data only
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List jobs
    Jobs,

    /// List candidates
    Candidates,

    /// Add a job
    AddJob {
        /// Job title
        #[arg(short, long)]
        title: String,

        /// Job description
        #[arg(short, long)]
        description: String,
    },

    /// Add a candidate
    AddCandidate {
        /// Candidate name
        #[arg(short, long)]
        name: String,

        /// Skills summary
        #[arg(short, long)]
        skills: String,
    },

    /// Match candidates against a stored job
    Match {
        /// Job id to match against
        job: String,

        /// Number of candidates to return
        #[arg(short = 'k', long)]
        top: Option<usize>,
    },

    /// Match candidates against an ad-hoc description
    MatchText {
        /// Free-form job description
        description: String,

        /// Number of candidates to return
        #[arg(short = 'k', long)]
        top: Option<usize>,
    },

    /// Search candidates by name
    Search {
        /// Name fragment, case-insensitive
        name: String,
    },
}
