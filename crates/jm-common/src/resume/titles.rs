use once_cell::sync::Lazy;
use regex::Regex;

// Line-start phrases ending in a role noun.
static ROLE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^[ \t]*([a-z][^,\n]*(?:engineer|developer|analyst|manager|director|lead|architect|consultant|specialist|coordinator))",
    )
    .unwrap()
});

// Explicitly labelled titles.
static LABELED_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:position|title|role):\s*([^,\n]+)").unwrap());

/// Extract candidate job titles from lowercased resume text. Matches
/// with length outside (3, 100) are discarded as noise; duplicates
/// collapse while preserving first-seen order.
pub fn extract_job_titles(text: &str) -> Vec<String> {
    let mut titles: Vec<String> = Vec::new();

    let candidates = ROLE_LINE_RE
        .captures_iter(text)
        .chain(LABELED_TITLE_RE.captures_iter(text));

    for caps in candidates {
        let title = caps[1].trim();
        if title.len() > 3 && title.len() < 100 && !titles.iter().any(|t| t == title) {
            titles.push(title.to_string());
        }
    }

    titles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_noun_lines_are_picked_up() {
        let text = "senior software engineer\nacme corp\n2015 - 2019\nproduct manager\nbeta inc";
        let titles = extract_job_titles(text);

        assert_eq!(titles, vec!["senior software engineer", "product manager"]);
    }

    #[test]
    fn labelled_titles_are_picked_up() {
        let titles = extract_job_titles("title: staff platform engineer");
        assert!(titles.iter().any(|t| t == "staff platform engineer"));
    }

    #[test]
    fn role_nouns_after_a_comma_do_not_match() {
        let titles = extract_job_titles("reported to the vp, then a manager");
        assert!(titles.is_empty());
    }

    #[test]
    fn short_and_overlong_candidates_are_dropped() {
        let long_title = format!("{} engineer", "very ".repeat(25));
        let text = format!("role: dev\n{long_title}");
        assert!(extract_job_titles(&text).is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let titles = extract_job_titles("backend developer\nother line\nbackend developer");
        assert_eq!(titles, vec!["backend developer"]);
    }
}
