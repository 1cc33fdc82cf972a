use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::vocabulary::{find_vocabulary_match, COMMON_SKILLS, SKILL_VARIATIONS};

/// Section headers that introduce a skill list.
const SKILL_SECTION_HEADERS: &[&str] = &[
    "skills",
    "technical skills",
    "core competencies",
    "technologies",
    "programming languages",
    "tools and technologies",
    "expertise",
    "proficiencies",
];

// A "word:" line starts a new resume section and ends the current one.
static HEADER_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*\w+:").unwrap());

/// Extract known skills from lowercased resume text.
///
/// Two passes: a vocabulary substring scan over the whole text (direct
/// name, then known variations), and a token scan over skills-like
/// sections where only exact vocabulary tokens count. Results are the
/// union, deduplicated case-insensitively, in canonical casing.
pub fn extract_skills(text: &str) -> Vec<String> {
    let mut found: Vec<&'static str> = Vec::new();

    for skill in COMMON_SKILLS {
        let lower = skill.to_lowercase();
        if text.contains(&lower) {
            found.push(skill);
            continue;
        }

        if let Some(variations) = SKILL_VARIATIONS.get(lower.as_str()) {
            if variations.iter().any(|v| text.contains(v)) {
                found.push(skill);
            }
        }
    }

    for section in extract_skill_sections(text) {
        found.extend(parse_section_tokens(&section));
    }

    let mut seen = HashSet::new();
    found
        .into_iter()
        .filter(|skill| seen.insert(skill.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Collect the text of each skills-like section: the remainder of the
/// header line plus following lines, up to a blank line or the next
/// `word:` header line.
fn extract_skill_sections(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sections = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(rest) = match_section_header(lines[i].trim()) else {
            i += 1;
            continue;
        };

        let mut content = rest.to_string();
        let mut j = i + 1;
        while j < lines.len() {
            let next = lines[j];
            if next.trim().is_empty() || HEADER_LINE_RE.is_match(next) {
                break;
            }
            content.push('\n');
            content.push_str(next);
            j += 1;
        }

        sections.push(content);
        i = j;
    }

    sections
}

/// A line opens a section when it is exactly a known header or a known
/// header followed by a colon and optional inline content.
fn match_section_header(line: &str) -> Option<&str> {
    for header in SKILL_SECTION_HEADERS {
        if let Some(rest) = line.strip_prefix(header) {
            if rest.is_empty() {
                return Some("");
            }
            if let Some(inline) = rest.strip_prefix(':') {
                return Some(inline.trim());
            }
        }
    }
    None
}

/// Keep only tokens that are exactly a vocabulary entry.
fn parse_section_tokens(section: &str) -> Vec<&'static str> {
    section
        .split(['\u{2022}', '\u{00b7}', ',', ';', '\n'])
        .filter_map(find_vocabulary_match)
        .collect()
}
