use crate::{Job, ParsedResumeData, ScoreDetails, SimilarityScore};

use super::{
    experience::calculate_experience_match, location::calculate_location_match,
    skills::calculate_skills_match, title::calculate_title_match, weights::MATCH_WEIGHTS,
};

/// Compute the weighted match score for one (resume, job) pair.
///
/// Pure function of its inputs; never fails. Empty skill or title lists
/// zero out the corresponding sub-score, and the weighted total is
/// capped at 1.0.
pub fn calculate_match(resume: &ParsedResumeData, job: &Job) -> SimilarityScore {
    let skills = calculate_skills_match(&resume.skills, &job.skills);
    let experience = calculate_experience_match(resume.experience_years, &job.experience_level);
    let location = calculate_location_match(job);
    let title = calculate_title_match(&resume.job_titles, &job.title);

    let overall = skills * MATCH_WEIGHTS.skills
        + experience * MATCH_WEIGHTS.experience
        + location * MATCH_WEIGHTS.location
        + title * MATCH_WEIGHTS.title;

    SimilarityScore {
        score: overall.min(1.0),
        details: ScoreDetails {
            skills,
            experience,
            location,
            title,
        },
    }
}
