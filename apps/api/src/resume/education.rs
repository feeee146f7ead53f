//! Education extraction: one record per line carrying a level keyword and a
//! recognizable "<degree> in <field>" phrase.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::keywords::{
    first_keyword, keyword_offsets, segment_lines, trim_trailing_punctuation,
};
use crate::resume::models::{EducationLevel, ExtractedEducation};
use crate::resume::vocabulary::Vocabulary;

/// Degree phrase anchored at a level cue: the cue word, an optional "of <name>"
/// clause and an optional "degree", then "in <field>".
static DEGREE_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?P<degree>[a-z][a-z.'’]*(?:\s+of\s+[a-z][a-z.'’]*(?:\s+[a-z][a-z.'’]*)?)?(?:\s+degree)?)\s+in\s+(?P<field>[a-z][a-z&/ \-]*?)\s*(?:,|;|\||\(|\bat\b|\bfrom\b|\b(?:19|20)\d{2}\b|$)",
    )
    .expect("valid degree pattern")
});

static YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b((?:19|20)\d{2})\b").expect("valid year pattern"));

static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:\bat\b|\bfrom\b|,)\s*(?P<name>[a-z][a-z&.'’\- ]*[a-z.])")
        .expect("valid institution pattern")
});

pub fn extract_education(text: &str, vocabulary: &Vocabulary) -> Vec<ExtractedEducation> {
    segment_lines(text)
        .iter()
        .filter_map(|line| parse_education_line(line, vocabulary))
        .collect()
}

fn parse_education_line(line: &str, vocabulary: &Vocabulary) -> Option<ExtractedEducation> {
    let level = detect_level(line, vocabulary)?;
    let (start, caps) = level_cue_offsets(line, vocabulary)
        .into_iter()
        .find_map(|offset| DEGREE_FIELD.captures(&line[offset..]).map(|caps| (offset, caps)))?;
    let degree = caps.name("degree")?.as_str().trim().to_string();
    let field = caps.name("field")?.as_str().trim().to_string();
    if field.is_empty() {
        return None;
    }

    // The field may be terminated by "at"/"from", so search from the end of the field.
    let field_end = start + caps.name("field")?.end();
    let institution = INSTITUTION
        .captures(&line[field_end..])
        .and_then(|c| c.name("name"))
        .map(|m| trim_trailing_punctuation(m.as_str()).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    let year = YEAR
        .captures(line)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<i32>().ok());

    Some(ExtractedEducation {
        degree,
        field,
        institution,
        year,
        level,
    })
}

/// Offsets of every education cue on the line, whatever its level.
fn level_cue_offsets(line: &str, vocabulary: &Vocabulary) -> Vec<usize> {
    let mut offsets: Vec<usize> = vocabulary
        .education_levels
        .iter()
        .flat_map(|(_, cues)| keyword_offsets(line, cues))
        .collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

fn detect_level(line: &str, vocabulary: &Vocabulary) -> Option<EducationLevel> {
    vocabulary
        .education_levels
        .iter()
        .find(|(_, cues)| first_keyword(line, cues).is_some())
        .map(|(level, _)| *level)
}
