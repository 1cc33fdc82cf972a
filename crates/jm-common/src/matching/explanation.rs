use crate::{Job, ParsedResumeData, SimilarityScore};

use super::skills::matching_skills;

fn percentage(score: f64) -> i64 {
    (score * 100.0).round() as i64
}

/// Render a three-clause natural-language explanation for a match:
/// overall assessment, skills assessment, experience assessment.
/// Deterministic templates selected by score band.
pub fn generate_match_explanation(
    score: &SimilarityScore,
    resume: &ParsedResumeData,
    job: &Job,
) -> String {
    let overall = overall_clause(percentage(score.score));
    let skills = skills_clause(percentage(score.details.skills), resume, job);
    let experience = experience_clause(percentage(score.details.experience), resume);

    format!("{overall} {skills} {experience}")
}

fn overall_clause(pct: i64) -> &'static str {
    if pct >= 85 {
        "Excellent match!"
    } else if pct >= 70 {
        "Strong match!"
    } else if pct >= 55 {
        "Good match!"
    } else if pct >= 40 {
        "Fair match!"
    } else {
        "Limited match."
    }
}

fn skills_clause(pct: i64, resume: &ParsedResumeData, job: &Job) -> String {
    let matched = matching_skills(&resume.skills, &job.skills);

    if pct >= 80 {
        let named: Vec<_> = matched.iter().take(3).cloned().collect();
        format!(
            "Your skills in {} align perfectly with this role.",
            named.join(", ")
        )
    } else if pct >= 60 {
        let named: Vec<_> = matched.iter().take(2).cloned().collect();
        format!(
            "Your {} skills are valuable for this position.",
            named.join(" and ")
        )
    } else if let Some(first) = matched.first() {
        format!("Your {first} experience is relevant.")
    } else {
        "Consider developing skills in the required technologies.".to_string()
    }
}

fn experience_clause(pct: i64, resume: &ParsedResumeData) -> String {
    let years = resume.experience_years;

    if pct >= 80 {
        format!("Your {years} years of experience meets their requirements perfectly.")
    } else if pct >= 60 {
        format!("Your {years} years of experience is well-suited for this level.")
    } else if pct >= 40 {
        "Your experience level is approaching their requirements.".to_string()
    } else {
        "Consider gaining more experience in this field.".to_string()
    }
}
