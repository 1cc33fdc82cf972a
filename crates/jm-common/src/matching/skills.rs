use std::collections::HashSet;
use std::sync::LazyLock;

/// Topical skill groups used for the semantic boost. Sharing a group on
/// both sides approximates relatedness without embeddings; keyword
/// lists are fixed product constants.
static SKILL_GROUPS: LazyLock<Vec<(&'static str, Vec<&'static str>)>> = LazyLock::new(|| {
    vec![
        (
            "frontend",
            vec![
                "react",
                "vue",
                "angular",
                "javascript",
                "typescript",
                "html",
                "css",
                "sass",
                "jsx",
            ],
        ),
        (
            "backend",
            vec![
                "node.js", "express", "django", "flask", "spring", "laravel", "php", "python",
                "java",
            ],
        ),
        (
            "database",
            vec![
                "mysql",
                "postgresql",
                "mongodb",
                "redis",
                "sqlite",
                "oracle",
                "sql",
            ],
        ),
        (
            "cloud",
            vec![
                "aws",
                "azure",
                "gcp",
                "docker",
                "kubernetes",
                "terraform",
                "ansible",
            ],
        ),
        (
            "mobile",
            vec!["react native", "flutter", "swift", "kotlin", "ios", "android"],
        ),
        (
            "ml",
            vec![
                "tensorflow",
                "pytorch",
                "scikit-learn",
                "pandas",
                "numpy",
                "machine learning",
                "ai",
            ],
        ),
        (
            "devops",
            vec![
                "ci/cd",
                "jenkins",
                "github actions",
                "docker",
                "kubernetes",
                "terraform",
            ],
        ),
    ]
});

/// Jaccard similarity over lowercased skill sets plus a capped semantic
/// group boost. Empty input on either side scores 0 rather than failing.
pub fn calculate_skills_match(resume_skills: &[String], job_skills: &[String]) -> f64 {
    if resume_skills.is_empty() || job_skills.is_empty() {
        return 0.0;
    }

    let resume: Vec<String> = resume_skills.iter().map(|s| s.to_lowercase()).collect();
    let job: Vec<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();

    let resume_set: HashSet<&str> = resume.iter().map(String::as_str).collect();
    let job_set: HashSet<&str> = job.iter().map(String::as_str).collect();

    let intersection = resume_set.intersection(&job_set).count();
    let union = resume_set.union(&job_set).count();
    let jaccard = intersection as f64 / union as f64;

    let boost = semantic_boost(&resume, &job);

    (jaccard + boost).min(1.0)
}

/// Skills present on both sides (lowercased), in resume order.
pub fn matching_skills(resume_skills: &[String], job_skills: &[String]) -> Vec<String> {
    let job: HashSet<String> = job_skills.iter().map(|s| s.to_lowercase()).collect();
    let mut seen = HashSet::new();
    resume_skills
        .iter()
        .map(|s| s.to_lowercase())
        .filter(|s| job.contains(s) && seen.insert(s.clone()))
        .collect()
}

/// +0.10 per group where both sides have at least one skill matching a
/// group keyword by substring (either direction), capped at 0.30.
fn semantic_boost(resume_skills: &[String], job_skills: &[String]) -> f64 {
    let mut boost: f64 = 0.0;

    for (_, keywords) in SKILL_GROUPS.iter() {
        let in_group = |skill: &String| {
            keywords
                .iter()
                .any(|kw| skill.contains(kw) || kw.contains(skill.as_str()))
        };

        if resume_skills.iter().any(in_group) && job_skills.iter().any(in_group) {
            boost += 0.1;
        }
    }

    boost.min(0.3)
}
