use jm_common::matching::{match_label, match_stats, rank_jobs_with_threshold};
use jm_common::resume::parse_resume_text;
use jm_common::Job;

const RESUME: &str = "\
Summary: Frontend engineer shipping production web apps.

Frontend Developer
Acme Corp

Skills: React, TypeScript, AWS

6 years of experience";

fn jobs() -> Vec<Job> {
    serde_json::from_value(serde_json::json!([
        {
            "id": "job-frontend",
            "title": "Senior Frontend Developer",
            "company": "Beta Inc",
            "location": "Austin, TX",
            "skills": ["React", "TypeScript"],
            "experience_level": "senior",
            "remote_option": true
        },
        {
            "id": "job-accounting",
            "title": "Accountant",
            "company": "Ledger LLC",
            "location": "Boston, MA",
            "skills": ["Excel"],
            "experience_level": "entry"
        }
    ]))
    .expect("job fixtures deserialize")
}

#[test]
fn resume_text_ranks_against_job_list_end_to_end() {
    let resume = parse_resume_text(RESUME);

    assert!(resume.skills.contains(&"React".to_string()));
    assert_eq!(resume.experience_years, 6);
    assert!(resume
        .job_titles
        .contains(&"frontend developer".to_string()));

    let ranked = rank_jobs_with_threshold(&resume, &jobs(), Some(0.5));

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].job.id, "job-frontend");
    assert_eq!(match_label(ranked[0].score.score), "Good Match");
    assert!(
        ranked[0]
            .explanation
            .contains("Your 6 years of experience is well-suited for this level."),
        "{}",
        ranked[0].explanation
    );
}

#[test]
fn stats_summarize_the_full_candidate_list() {
    let resume = parse_resume_text(RESUME);
    let ranked = rank_jobs_with_threshold(&resume, &jobs(), Some(0.0));
    let stats = match_stats(&ranked);

    assert_eq!(stats.total, 2);
    assert_eq!(stats.excellent, 0);
    assert_eq!(stats.good, 1);
    assert!(stats.average_score > 0.0 && stats.average_score < 1.0);
}

#[test]
fn sparse_postings_deserialize_with_defaults_and_still_score() {
    let job: Job = serde_json::from_str(
        r#"{"title": "Data Analyst", "company": "Gamma", "location": "Denver, CO"}"#,
    )
    .expect("sparse posting deserializes");

    assert!(job.skills.is_empty());
    assert!(!job.remote_option);

    let resume = parse_resume_text(RESUME);
    let score = jm_common::matching::calculate_match(&resume, &job);
    assert!((0.0..=1.0).contains(&score.score));
}
