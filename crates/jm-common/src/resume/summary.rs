use once_cell::sync::Lazy;
use regex::Regex;

/// Returned when no summary section is present.
pub const FALLBACK_SUMMARY: &str =
    "Professional with expertise in software development and technology solutions.";

const SUMMARY_MAX_CHARS: usize = 500;

// Header is case-insensitive; the terminating capitalized header is not.
static SUMMARY_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i:summary|profile|overview|objective):\s*((?s:.)+?)(?:\n[ \t]*\n|\n[A-Z])")
            .unwrap(),
        Regex::new(
            r"(?i:professional\s+summary|career\s+summary):\s*((?s:.)+?)(?:\n[ \t]*\n|\n[A-Z])",
        )
        .unwrap(),
    ]
});

/// Extract a summary from original-case resume text: the content of a
/// summary-like section up to the next blank line or capitalized header,
/// truncated to 500 characters with an ellipsis. Falls back to a generic
/// sentence.
pub fn extract_summary(text: &str) -> String {
    for re in SUMMARY_RES.iter() {
        if let Some(caps) = re.captures(text) {
            let summary = caps[1].trim();
            if !summary.is_empty() {
                return truncate_summary(summary);
            }
        }
    }

    FALLBACK_SUMMARY.to_string()
}

fn truncate_summary(summary: &str) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary.to_string();
    }

    let mut truncated: String = summary.chars().take(SUMMARY_MAX_CHARS).collect();
    truncated.push_str("...");
    truncated
}
