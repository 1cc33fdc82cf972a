use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Education;

// Degree statements: keyword, optional "of science in" connective, then
// the field up to a comma or line end.
static DEGREE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(bachelor'?s?|b\.?[as]\.?|undergraduate)\s+(?:of\s+)?(?:science\s+)?(?:in\s+)?([^,\n]+)")
            .unwrap(),
        Regex::new(r"(master'?s?|m\.?[as]\.?|graduate)\s+(?:of\s+)?(?:science\s+)?(?:in\s+)?([^,\n]+)")
            .unwrap(),
        Regex::new(r"(phd|ph\.?d\.?|doctorate|doctoral)\s+(?:in\s+)?([^,\n]+)").unwrap(),
        Regex::new(r"(associate'?s?|a\.?[as]\.?)\s+(?:of\s+)?(?:science\s+)?(?:in\s+)?([^,\n]+)")
            .unwrap(),
    ]
});

// Phrase ending in a school noun, and the "university of x" form.
static SCHOOL_PHRASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z][^,\n]*(?:university|college|institute|school)").unwrap());
static SCHOOL_OF_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:university|college|institute)\s+of\s+[^,\n]+").unwrap());

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Extract education entries from lowercased resume text.
///
/// Each degree statement yields one entry; the school and year are taken
/// from a 200-character window around the statement. When no degree is
/// found at all, bare school names become entries with an unspecified
/// degree.
pub fn extract_education(text: &str) -> Vec<Education> {
    let mut education = Vec::new();

    for re in DEGREE_RES.iter() {
        for caps in re.captures_iter(text) {
            let degree = normalize_degree(&caps[1]);
            let field = caps[2].trim();

            let context = context_window(text, caps.get(0).map_or(0, |m| m.start()), 100);
            let school = school_from_context(context);
            let year = year_from_context(context);

            education.push(Education {
                degree: format!("{degree} {field}").trim().to_string(),
                school: school.unwrap_or_else(|| "Not specified".to_string()),
                year,
                field: if field.is_empty() {
                    None
                } else {
                    Some(field.to_string())
                },
            });
        }
    }

    if education.is_empty() {
        for school in school_names(text) {
            education.push(Education {
                degree: "Not specified".to_string(),
                school,
                year: None,
                field: None,
            });
        }
    }

    education
}

fn normalize_degree(degree: &str) -> &str {
    match degree {
        "bachelor" | "bachelors" | "bachelor's" | "b.s." | "bs" => "Bachelor of Science",
        "b.a." | "ba" => "Bachelor of Arts",
        "master" | "masters" | "master's" | "m.s." | "ms" => "Master of Science",
        "m.a." | "ma" => "Master of Arts",
        "phd" | "ph.d." | "doctorate" | "doctoral" => "PhD",
        "associate" | "associates" | "associate's" => "Associate Degree",
        "a.s." => "Associate of Science",
        "a.a." => "Associate of Arts",
        other => other,
    }
}

/// Slice roughly `radius` bytes either side of `index`, widened to the
/// nearest char boundaries.
fn context_window(text: &str, index: usize, radius: usize) -> &str {
    let mut start = index.saturating_sub(radius);
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    let mut end = (index + radius).min(text.len());
    while !text.is_char_boundary(end) {
        end += 1;
    }
    &text[start..end]
}

fn school_from_context(context: &str) -> Option<String> {
    if let Some(m) = SCHOOL_PHRASE_RE.find(context) {
        return Some(m.as_str().trim().to_string());
    }
    SCHOOL_OF_RE
        .find(context)
        .map(|m| m.as_str().trim().to_string())
}

/// Most recent plausible year in the window, within [1980, now + 10].
fn year_from_context(context: &str) -> Option<i32> {
    let max_year = Utc::now().year() + 10;

    YEAR_RE
        .find_iter(context)
        .filter_map(|m| m.as_str().parse::<i32>().ok())
        .filter(|year| (1980..=max_year).contains(year))
        .max()
}

fn school_names(text: &str) -> Vec<String> {
    let mut schools: Vec<String> = Vec::new();
    for m in SCHOOL_PHRASE_RE.find_iter(text) {
        let school = m.as_str().trim().to_string();
        if !schools.contains(&school) {
            schools.push(school);
        }
    }
    schools
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_field_school_and_year_come_from_one_statement() {
        let text = "education:\nbachelor of science in computer science, stanford university, 2018";
        let education = extract_education(text);

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor of Science computer science");
        assert_eq!(education[0].school, "stanford university");
        assert_eq!(education[0].year, Some(2018));
        assert_eq!(education[0].field.as_deref(), Some("computer science"));
    }

    #[test]
    fn abbreviated_degrees_normalize() {
        let text = "m.s. in data science\nuniversity of washington\n2020 - 2022";
        let education = extract_education(text);

        assert_eq!(education[0].degree, "Master of Science data science");
        assert_eq!(education[0].school, "university of washington");
        assert_eq!(education[0].year, Some(2022));
    }

    #[test]
    fn bare_school_names_back_fill_when_no_degree_matches() {
        let education = extract_education("attended mit school of engineering for two terms");

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Not specified");
        assert_eq!(education[0].school, "attended mit school");
        assert_eq!(education[0].year, None);
    }

    #[test]
    fn years_outside_the_plausible_range_are_ignored() {
        let text = "phd in history, oxford university, 1875";
        let education = extract_education(text);
        assert_eq!(education[0].year, None);
    }

    #[test]
    fn no_education_yields_empty_list() {
        assert!(extract_education("worked on backend services").is_empty());
    }

    #[test]
    fn context_window_respects_multibyte_boundaries() {
        let mut text = "é".repeat(80);
        text.push_str("\nbachelors in économie, paris university, 2019");
        let education = extract_education(&text);

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor of Science économie");
    }
}
