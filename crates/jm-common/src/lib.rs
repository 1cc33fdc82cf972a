pub mod logging;
pub mod matching;
pub mod resume;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Job posting as supplied by the caller (JSON array of postings).
///
/// `experience_level` is one of entry|mid|senior|executive and
/// `job_type` one of full-time|part-time|contract|internship; both stay
/// strings and unrecognized values are defaulted where they are used,
/// so a malformed posting never fails to score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub salary_min: Option<u32>,
    #[serde(default)]
    pub salary_max: Option<u32>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub remote_option: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Structured fields extracted from raw resume text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResumeData {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education: Vec<Education>,
    pub job_titles: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub field: Option<String>,
}

/// Weighted match score for one (resume, job) pair. Recomputed per pair,
/// never cached here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityScore {
    pub score: f64,
    pub details: ScoreDetails,
}

/// Per-factor sub-scores, each in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub title: f64,
}
