use std::sync::LazyLock;

use strsim::levenshtein;

/// Synonym groups for common tech-role terms. A group counts when
/// either the key term or one of its synonyms appears in a title.
static TITLE_SYNONYMS: LazyLock<Vec<(&'static str, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        ("developer", vec!["engineer", "programmer", "coder"]),
        ("senior", vec!["lead", "principal", "staff"]),
        ("junior", vec!["entry", "associate", "jr"]),
        ("fullstack", vec!["full stack", "full-stack"]),
        ("frontend", vec!["front end", "front-end", "ui", "client"]),
        ("backend", vec!["back end", "back-end", "server", "api"]),
        ("mobile", vec!["ios", "android", "app"]),
        ("data", vec!["analytics", "scientist", "analyst"]),
        (
            "devops",
            vec!["sre", "infrastructure", "platform", "reliability"],
        ),
        ("manager", vec!["lead", "director", "head", "vp"]),
    ]
});

/// Best title similarity across all candidate titles from the resume.
///
/// A substring containment either way scores 0.9 outright for that
/// candidate; otherwise the candidate scores the better of normalized
/// Levenshtein similarity and the synonym-group score. Empty candidate
/// list scores 0.
pub fn calculate_title_match(resume_titles: &[String], job_title: &str) -> f64 {
    if resume_titles.is_empty() {
        return 0.0;
    }

    let job_title = job_title.to_lowercase();
    let mut best: f64 = 0.0;

    for title in resume_titles {
        let title = title.to_lowercase();

        if job_title.contains(&title) || title.contains(&job_title) {
            best = best.max(0.9);
            continue;
        }

        let distance = levenshtein(&title, &job_title);
        let max_len = title.len().max(job_title.len());
        let similarity = 1.0 - distance as f64 / max_len as f64;

        let semantic = synonym_group_score(&title, &job_title);

        best = best.max(similarity.max(semantic));
    }

    best
}

/// +0.2 per synonym group present in both titles, capped at 0.8.
fn synonym_group_score(title_a: &str, title_b: &str) -> f64 {
    let mut score = 0.0;

    for (term, synonyms) in TITLE_SYNONYMS.iter() {
        let has_term = |title: &str| {
            title.contains(term) || synonyms.iter().any(|syn| title.contains(syn))
        };

        if has_term(title_a) && has_term(title_b) {
            score += 0.2;
        }
    }

    f64::min(score, 0.8)
}
