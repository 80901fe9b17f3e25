//! Application wiring and command dispatch.

mod cli;

pub use cli::{Cli, Commands};

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::config::Settings;
use crate::domain::{Candidate, Job, JobId};
use crate::embedding::{Encoder, EncoderConfig};
use crate::providers::matching::{
    CandidateDraft, HttpMatchingProvider, JobDraft, MatchingProvider,
};
use crate::services::{CandidateService, JobService, MatchResult, MatchService};
use crate::storage::MemoryStore;

/// Main application entry point
pub struct App;

impl App {
    /// Parse the command line and run the requested command.
    pub async fn run() -> Result<()> {
        let cli = Cli::parse();
        let settings = Settings::default();

        let base_url = cli
            .base_url
            .clone()
            .unwrap_or_else(|| settings.api.base_url.clone());

        let provider: Option<Arc<dyn MatchingProvider>> = if cli.offline {
            None
        } else {
            Some(Arc::new(HttpMatchingProvider::new(base_url)?))
        };

        let store = Arc::new(MemoryStore::with_sample_data());
        let encoder = Encoder::new(EncoderConfig {
            dimension: settings.encoder.dimension,
        });

        match cli.command {
            Commands::Jobs => {
                let service = job_service(&provider, &store, &encoder);
                print_jobs(&service.list().await);
            }
            Commands::Candidates => {
                let service = candidate_service(&provider, &store, &encoder);
                print_candidates(&service.list().await);
            }
            Commands::AddJob { title, description } => {
                let service = job_service(&provider, &store, &encoder);
                let job = service.create(JobDraft::new(title, description)).await?;
                println!("Created job {}", job.id);
            }
            Commands::AddCandidate { name, skills } => {
                let service = candidate_service(&provider, &store, &encoder);
                let candidate = service.create(CandidateDraft::new(name, skills)).await?;
                println!("Created candidate {}", candidate.id);
            }
            Commands::Match { job, top } => {
                let service = match_service(
                    &provider,
                    &store,
                    &encoder,
                    top.unwrap_or(settings.matching.top_k),
                );
                print_matches(&service.match_job(&JobId::from(job.as_str())).await?);
            }
            Commands::MatchText { description, top } => {
                let service = match_service(
                    &provider,
                    &store,
                    &encoder,
                    top.unwrap_or(settings.matching.top_k),
                );
                print_matches(&service.match_description(&description).await?);
            }
            Commands::Search { name } => {
                let service = candidate_service(&provider, &store, &encoder);
                print_candidates(&service.search(&name).await);
            }
        }

        Ok(())
    }
}

fn job_service(
    provider: &Option<Arc<dyn MatchingProvider>>,
    store: &Arc<MemoryStore>,
    encoder: &Encoder,
) -> JobService {
    let service = JobService::new(store.clone(), encoder.clone());
    match provider {
        Some(provider) => service.with_provider(provider.clone()),
        None => service,
    }
}

fn candidate_service(
    provider: &Option<Arc<dyn MatchingProvider>>,
    store: &Arc<MemoryStore>,
    encoder: &Encoder,
) -> CandidateService {
    let service = CandidateService::new(store.clone(), encoder.clone());
    match provider {
        Some(provider) => service.with_provider(provider.clone()),
        None => service,
    }
}

fn match_service(
    provider: &Option<Arc<dyn MatchingProvider>>,
    store: &Arc<MemoryStore>,
    encoder: &Encoder,
    top_k: usize,
) -> MatchService {
    let service = MatchService::new(store.clone(), encoder.clone(), top_k);
    match provider {
        Some(provider) => service.with_provider(provider.clone()),
        None => service,
    }
}

fn print_jobs(jobs: &[Job]) {
    if jobs.is_empty() {
        println!("No jobs found");
        return;
    }
    for job in jobs {
        println!("{:<6} {:<20} {}", job.id, job.title(), job.description());
    }
}

fn print_candidates(candidates: &[Candidate]) {
    if candidates.is_empty() {
        println!("No candidates found");
        return;
    }
    for candidate in candidates {
        println!(
            "{:<6} {:<20} {}",
            candidate.id,
            candidate.name(),
            candidate.skills()
        );
    }
}

fn print_matches(results: &[MatchResult]) {
    if results.is_empty() {
        println!("No matching candidates found");
        return;
    }
    for (rank, result) in results.iter().enumerate() {
        println!(
            "{:>2}. {:<20} {:>8}  {}",
            rank + 1,
            result.candidate.name(),
            format_score(result.score),
            result.candidate.skills()
        );
    }
}

/// Format a similarity score, or a dash when the remote service ranked
/// without reporting one.
fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{:.4}", score),
        None => "-".to_string(),
    }
}
