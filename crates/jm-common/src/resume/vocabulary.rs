use std::collections::HashMap;
use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

/// Known skill names, in the casing they are reported with. Extraction
/// matches case-insensitively but always emits these spellings.
pub const COMMON_SKILLS: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "React",
    "Node.js",
    "Python",
    "Java",
    "C#",
    "HTML",
    "CSS",
    "SQL",
    "Git",
    "Docker",
    "AWS",
    "Azure",
    "MongoDB",
    "PostgreSQL",
    "Express.js",
    "Next.js",
    "Vue.js",
    "Angular",
    "Spring Boot",
    "Django",
    "Flask",
    "Laravel",
    "Ruby on Rails",
    "Go",
    "Rust",
    "PHP",
    "Swift",
    "Kotlin",
    "Flutter",
    "React Native",
    "Redux",
    "GraphQL",
    "REST API",
    "Microservices",
    "DevOps",
    "CI/CD",
    "Kubernetes",
    "Terraform",
    "Jenkins",
    "Linux",
    "Machine Learning",
    "Data Science",
    "Artificial Intelligence",
    "Deep Learning",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "Elasticsearch",
    "Redis",
    "RabbitMQ",
    "Apache Kafka",
    "Apache Spark",
    "Hadoop",
    "Tableau",
    "Power BI",
    "Figma",
    "Adobe Creative Suite",
    "Sketch",
    "InVision",
    "Zeplin",
    "Agile",
    "Scrum",
    "Jira",
    "Confluence",
    "Slack",
    "Microsoft Office",
    "Google Workspace",
    "Salesforce",
    "HubSpot",
    "Shopify",
    "WordPress",
    "Webflow",
    "Notion",
    "Airtable",
];

/// Alternate spellings and abbreviations per (lowercased) skill name.
/// Checked only when the skill itself is absent from the text.
pub static SKILL_VARIATIONS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let variations: &[(&str, &[&str])] = &[
            ("javascript", &["js", "ecmascript", "es6", "es2015", "node.js"]),
            ("typescript", &["ts"]),
            ("react", &["reactjs", "react.js"]),
            ("node.js", &["nodejs", "node js", "javascript", "js"]),
            ("vue.js", &["vuejs", "vue js"]),
            ("angular", &["angularjs", "angular.js"]),
            ("python", &["py"]),
            ("c#", &["csharp", "c sharp", "dotnet", ".net"]),
            ("c++", &["cpp", "cplusplus"]),
            ("postgresql", &["postgres", "psql"]),
            ("mongodb", &["mongo"]),
            ("react native", &["reactnative"]),
            ("machine learning", &["ml", "ai", "artificial intelligence"]),
            ("tensorflow", &["tf"]),
            ("scikit-learn", &["sklearn"]),
            ("github", &["git hub"]),
            ("gitlab", &["git lab"]),
        ];

        variations.iter().copied().collect()
    });

/// NFKC-normalize, trim, and lowercase a token for comparison.
pub fn normalize_token(token: &str) -> String {
    token.nfkc().collect::<String>().trim().to_lowercase()
}

/// Map a free-form token onto a vocabulary entry by case-insensitive
/// equality, returning the canonical casing.
pub fn find_vocabulary_match(token: &str) -> Option<&'static str> {
    let normalized = normalize_token(token);
    if normalized.is_empty() {
        return None;
    }

    COMMON_SKILLS
        .iter()
        .find(|skill| skill.to_lowercase() == normalized)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_match_is_case_insensitive_and_canonical() {
        assert_eq!(find_vocabulary_match("react"), Some("React"));
        assert_eq!(find_vocabulary_match("  POSTGRESQL "), Some("PostgreSQL"));
        assert_eq!(find_vocabulary_match("node.js"), Some("Node.js"));
        assert_eq!(find_vocabulary_match("not-a-skill"), None);
        assert_eq!(find_vocabulary_match(""), None);
    }

    #[test]
    fn fullwidth_text_normalizes_before_lookup() {
        assert_eq!(find_vocabulary_match("Ｒｅａｃｔ"), Some("React"));
    }

    #[test]
    fn variations_cover_common_abbreviations() {
        assert!(SKILL_VARIATIONS["javascript"].contains(&"es6"));
        assert!(SKILL_VARIATIONS["c#"].contains(&".net"));
        assert!(SKILL_VARIATIONS.get("rust").is_none());
    }
}
