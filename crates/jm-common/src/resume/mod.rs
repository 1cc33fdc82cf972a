pub mod education;
pub mod experience;
pub mod skills;
pub mod summary;
pub mod titles;
pub mod vocabulary;

pub use summary::FALLBACK_SUMMARY;

use tracing::debug;

use crate::ParsedResumeData;

/// Parse raw resume text into structured fields.
///
/// Analysis runs over a lowercased, trimmed copy; summary extraction
/// keeps the original casing. Total over its input: malformed or empty
/// text degrades to defaults rather than failing.
pub fn parse_resume_text(text: &str) -> ParsedResumeData {
    let lowered = text.to_lowercase();
    let clean = lowered.trim();

    let parsed = ParsedResumeData {
        skills: skills::extract_skills(clean),
        experience_years: experience::extract_experience_years(clean),
        education: education::extract_education(clean),
        job_titles: titles::extract_job_titles(clean),
        summary: summary::extract_summary(text),
    };

    debug!(
        skills = parsed.skills.len(),
        experience_years = parsed.experience_years,
        education = parsed.education.len(),
        job_titles = parsed.job_titles.len(),
        "parsed resume text"
    );

    parsed
}
