use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

// Explicit statements: "5+ years of experience", "7 years in/with",
// "experience: 12 years", "3 yrs exp".
static EXPLICIT_YEARS_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(\d+)\+?\s*years?\s+(?:of\s+)?experience").unwrap(),
        Regex::new(r"(\d+)\+?\s*years?\s+(?:in|with)\b").unwrap(),
        Regex::new(r"experience:?\s*(\d+)\+?\s*years?").unwrap(),
        Regex::new(r"(\d+)\+?\s*yrs?\s+exp").unwrap(),
    ]
});

// Work-history ranges: "2018 - 2020", "2020 - present",
// "january 2018 - march 2020", "june 2021 - current".
static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-\u{2013}\u{2014}]\s*(\d{4}|present|current)").unwrap());
static MONTH_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([a-z]+)\s+(\d{4})\s*[-\u{2013}\u{2014}]\s*(?:([a-z]+)\s+(\d{4})|present|current)")
        .unwrap()
});

const SENIOR_INDICATORS: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "architect",
    "manager",
    "director",
    "team lead",
    "technical lead",
    "staff engineer",
];
const MID_INDICATORS: &[&str] = &["software engineer", "developer", "programmer", "analyst"];
const JUNIOR_INDICATORS: &[&str] = &["junior", "entry", "intern", "trainee", "associate", "graduate"];
const COMPLEXITY_INDICATORS: &[&str] = &[
    "architecture",
    "scalability",
    "microservices",
    "distributed",
    "performance",
    "optimization",
    "mentoring",
    "leadership",
];

/// Estimate years of experience from lowercased resume text.
///
/// Attempts in order, first success wins: explicit statements (≤ 50
/// accepted), work-history date ranges, then a content-based estimate.
pub fn extract_experience_years(text: &str) -> u32 {
    for re in EXPLICIT_YEARS_RES.iter() {
        if let Some(caps) = re.captures(text) {
            if let Ok(years) = caps[1].parse::<u32>() {
                if (1..=50).contains(&years) {
                    return years;
                }
                warn!(years, "ignoring implausible explicit experience statement");
            }
        }
    }

    let work_years = calculate_work_history_years(text);
    if work_years > 0 {
        return work_years;
    }

    estimate_from_content(text)
}

/// Longest single employment span found in date ranges, capped at 30.
/// Deliberately not the sum of spans: resumes overlap ranges freely and
/// the longest span is the conservative read.
fn calculate_work_history_years(text: &str) -> u32 {
    let current_year = Utc::now().year();
    let mut spans: Vec<i32> = Vec::new();

    for caps in YEAR_RANGE_RE.captures_iter(text) {
        if let Some(span) = range_span(&caps[1], Some(&caps[2]), current_year) {
            spans.push(span);
        }
    }

    for caps in MONTH_RANGE_RE.captures_iter(text) {
        let end = caps.get(4).map(|m| m.as_str());
        if let Some(span) = range_span(&caps[2], end, current_year) {
            spans.push(span);
        }
    }

    spans.into_iter().max().unwrap_or(0).min(30) as u32
}

fn range_span(start: &str, end: Option<&str>, current_year: i32) -> Option<i32> {
    let start: i32 = start.parse().ok()?;
    let end: i32 = match end {
        Some("present") | Some("current") | None => current_year,
        Some(year) => year.parse().ok()?,
    };

    if start >= 1980 && start <= end {
        Some(end - start)
    } else {
        None
    }
}

/// Fallback estimate from seniority and complexity vocabulary: +7 for
/// any senior indicator, else +4 mid, else +1 junior, else +3; +0.5 per
/// distinct complexity term; rounded and capped at 15.
fn estimate_from_content(text: &str) -> u32 {
    let has_any = |indicators: &[&str]| indicators.iter().any(|term| text.contains(term));

    let mut score: f64 = if has_any(SENIOR_INDICATORS) {
        7.0
    } else if has_any(MID_INDICATORS) {
        4.0
    } else if has_any(JUNIOR_INDICATORS) {
        1.0
    } else {
        3.0
    };

    score += 0.5
        * COMPLEXITY_INDICATORS
            .iter()
            .filter(|term| text.contains(*term))
            .count() as f64;

    (score.round() as u32).min(15)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Utc};

    #[test]
    fn explicit_statements_win() {
        assert_eq!(extract_experience_years("5+ years of experience in web"), 5);
        assert_eq!(extract_experience_years("over 7 years in backend work"), 7);
        assert_eq!(extract_experience_years("experience: 12 years"), 12);
        assert_eq!(extract_experience_years("3 yrs exp shipping mobile apps"), 3);
    }

    #[test]
    fn implausible_explicit_years_fall_through() {
        // 60 fails the sanity cap; no dates, no indicators -> default 3.
        assert_eq!(extract_experience_years("60 years of experience"), 3);
    }

    #[test]
    fn work_history_ranges_are_measured() {
        assert_eq!(extract_experience_years("acme corp\n2015 - 2019\nduties"), 4);

        let current = Utc::now().year();
        let open_ended = extract_experience_years("acme corp\n2020 - present");
        assert_eq!(open_ended, (current - 2020) as u32);

        let month_form = extract_experience_years("acme\njanuary 2016 - march 2021");
        assert_eq!(month_form, 5);
    }

    #[test]
    fn work_history_takes_longest_span_not_sum() {
        // Two jobs of 5 and 3 years report 5, not 8.
        let text = "first corp\n2010 - 2015\nsecond corp\n2016 - 2019";
        assert_eq!(extract_experience_years(text), 5);
    }

    #[test]
    fn work_history_rejects_pre_1980_and_inverted_ranges() {
        assert_eq!(extract_experience_years("archive 1875 - 1880"), 3);
        assert_eq!(extract_experience_years("typo 2020 - 2010"), 3);
    }

    #[test]
    fn work_history_span_caps_at_thirty() {
        assert_eq!(extract_experience_years("lifer\n1980 - 2020"), 30);
    }

    #[test]
    fn content_estimate_ranks_seniority() {
        assert_eq!(
            extract_experience_years("senior architect focused on microservices and scalability"),
            8
        );
        assert_eq!(extract_experience_years("software engineer"), 4);
        assert_eq!(extract_experience_years("junior intern, recent graduate"), 1);
        assert_eq!(extract_experience_years(""), 3);
    }
}
