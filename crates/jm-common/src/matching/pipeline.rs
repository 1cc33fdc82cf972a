use std::cmp::Ordering;

use tracing::debug;

use crate::{Job, ParsedResumeData, SimilarityScore};

use super::{explanation::generate_match_explanation, scoring::calculate_match};

fn min_match_score() -> f64 {
    std::env::var("JM_MIN_MATCH_SCORE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.5)
}

/// One job scored against a resume, with its explanation attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedJobMatch {
    pub job: Job,
    pub score: SimilarityScore,
    pub explanation: String,
}

/// Aggregate view over a ranked match list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchStats {
    pub total: usize,
    pub excellent: usize,
    pub good: usize,
    pub average_score: f64,
}

/// Score every job against the resume, drop those at or below the
/// minimum score (`JM_MIN_MATCH_SCORE`, default 0.5), and sort the rest
/// by score descending. Jobs are independent; order of the input does
/// not affect individual scores.
pub fn rank_jobs(resume: &ParsedResumeData, jobs: &[Job]) -> Vec<RankedJobMatch> {
    rank_jobs_with_threshold(resume, jobs, None)
}

pub fn rank_jobs_with_threshold(
    resume: &ParsedResumeData,
    jobs: &[Job],
    threshold_override: Option<f64>,
) -> Vec<RankedJobMatch> {
    let threshold = threshold_override.unwrap_or_else(min_match_score);

    let mut ranked: Vec<_> = jobs
        .iter()
        .filter_map(|job| {
            let score = calculate_match(resume, job);
            if score.score <= threshold {
                return None;
            }
            let explanation = generate_match_explanation(&score, resume, job);
            Some(RankedJobMatch {
                job: job.clone(),
                score,
                explanation,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .score
            .partial_cmp(&a.score.score)
            .unwrap_or(Ordering::Equal)
    });

    debug!(
        candidates = jobs.len(),
        kept = ranked.len(),
        threshold,
        "ranked jobs for resume"
    );

    ranked
}

/// Totals and average over a ranked list: excellent at >= 0.8, good in
/// [0.6, 0.8).
pub fn match_stats(matches: &[RankedJobMatch]) -> MatchStats {
    let total = matches.len();
    let excellent = matches.iter().filter(|m| m.score.score >= 0.8).count();
    let good = matches
        .iter()
        .filter(|m| m.score.score >= 0.6 && m.score.score < 0.8)
        .count();
    let average_score = if total > 0 {
        matches.iter().map(|m| m.score.score).sum::<f64>() / total as f64
    } else {
        0.0
    };

    MatchStats {
        total,
        excellent,
        good,
        average_score,
    }
}

/// Display label for a score band.
pub fn match_label(score: f64) -> &'static str {
    if score >= 0.8 {
        "Excellent Match"
    } else if score >= 0.6 {
        "Good Match"
    } else if score >= 0.4 {
        "Fair Match"
    } else {
        "Poor Match"
    }
}
