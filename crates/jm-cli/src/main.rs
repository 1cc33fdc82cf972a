use std::fs;
use std::path::PathBuf;

use clap::Parser;
use dotenvy::dotenv;
use jm_common::logging::init_tracing_subscriber;
use jm_common::matching::{match_label, match_stats, rank_jobs_with_threshold};
use jm_common::resume::parse_resume_text;
use jm_common::Job;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Parser)]
#[command(name = "jm", about = "Rank job postings against a resume")]
struct Cli {
    /// Plain-text resume file
    #[arg(long, env = "JM_RESUME_PATH")]
    resume: PathBuf,

    /// JSON array of job postings
    #[arg(long, env = "JM_JOBS_PATH")]
    jobs: PathBuf,

    /// Keep only matches scoring above this threshold
    #[arg(long, env = "JM_MIN_MATCH_SCORE", default_value_t = 0.5)]
    min_score: f64,

    /// Show at most this many matches
    #[arg(long, env = "JM_TOP_N", default_value_t = 10)]
    top: usize,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse job list {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    fn io(path: &PathBuf, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.clone(),
            source,
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let resume_text = fs::read_to_string(&cli.resume).map_err(|e| CliError::io(&cli.resume, e))?;
    let jobs_raw = fs::read_to_string(&cli.jobs).map_err(|e| CliError::io(&cli.jobs, e))?;
    let jobs: Vec<Job> = serde_json::from_str(&jobs_raw).map_err(|source| CliError::Json {
        path: cli.jobs.clone(),
        source,
    })?;

    let resume = parse_resume_text(&resume_text);
    info!(
        skills = resume.skills.len(),
        experience_years = resume.experience_years,
        jobs = jobs.len(),
        "scoring jobs against resume"
    );

    let ranked = rank_jobs_with_threshold(&resume, &jobs, Some(cli.min_score));
    let stats = match_stats(&ranked);

    for m in ranked.iter().take(cli.top) {
        println!(
            "{:>5.1}%  {:<15} {} at {}",
            m.score.score * 100.0,
            match_label(m.score.score),
            m.job.title,
            m.job.company
        );
        println!("        {}", m.explanation);
    }

    println!(
        "{} of {} postings matched (excellent: {}, good: {}, avg score: {:.2})",
        stats.total,
        jobs.len(),
        stats.excellent,
        stats.good,
        stats.average_score
    );

    Ok(())
}

fn main() {
    dotenv().ok();
    init_tracing_subscriber("jm");

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "jm failed");
        std::process::exit(1);
    }
}
