//! Experience extraction as a two-state line scanner.
//!
//! `Idle` ── title line ──▶ `Open`
//! `Open` ── title line ──▶ emit, `Open` (new record)
//! `Open` ── bullet line ─▶ `Open` (responsibility appended)
//! `Open` ── end of input ▶ emit, done
//! Other lines, and bullets while `Idle`, leave the state unchanged.

use chrono::{Datelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::resume::keywords::{
    first_keyword, match_keywords, segment_lines, strip_bullet, trim_trailing_punctuation,
};
use crate::resume::models::ExtractedExperience;
use crate::resume::vocabulary::Vocabulary;

static DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b((?:19|20)\d{2})\s*(?:-|–|—|to)\s*((?:19|20)\d{2}|present|current)\b")
        .expect("valid duration pattern")
});

static COMPANY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:\bat\b|@|,)\s*(?P<name>[a-z0-9][a-z0-9&.'’ \-]*?)\s*(?:,|;|\||\(|\b(?:19|20)\d{2}\b|$)",
    )
    .expect("valid company pattern")
});

const UNKNOWN: &str = "Unknown";

enum ScanState {
    Idle,
    Open(OpenRecord),
}

struct OpenRecord {
    title: String,
    company: String,
    duration_text: String,
    years_in_role: u32,
    source_text: String,
    responsibilities: Vec<String>,
}

impl OpenRecord {
    fn from_title_line(line: &str, title: &str, current_year: i32) -> Self {
        let (duration_text, years_in_role) = parse_duration(line, current_year);
        Self {
            title: title.to_string(),
            company: parse_company(line),
            duration_text,
            years_in_role,
            source_text: line.to_string(),
            responsibilities: Vec::new(),
        }
    }

    fn close(self, vocabulary: &Vocabulary) -> ExtractedExperience {
        let mut text = self.source_text;
        for r in &self.responsibilities {
            text.push('\n');
            text.push_str(r);
        }
        let skills = match_keywords(&text, vocabulary.technical_skills)
            .into_iter()
            .chain(match_keywords(&text, vocabulary.soft_skills))
            .map(str::to_string)
            .collect();

        ExtractedExperience {
            title: self.title,
            company: self.company,
            duration_text: self.duration_text,
            years_in_role: self.years_in_role,
            responsibilities: self.responsibilities,
            skills,
        }
    }
}

pub fn extract_experience(text: &str, vocabulary: &Vocabulary) -> Vec<ExtractedExperience> {
    extract_experience_as_of(text, vocabulary, Utc::now().year())
}

/// Same as [`extract_experience`] with "present"/"current" resolved to `current_year`.
pub fn extract_experience_as_of(
    text: &str,
    vocabulary: &Vocabulary,
    current_year: i32,
) -> Vec<ExtractedExperience> {
    let mut emitted = Vec::new();
    let mut state = ScanState::Idle;

    for line in segment_lines(text) {
        state = match (state, strip_bullet(&line)) {
            (ScanState::Open(mut record), Some(item)) => {
                record.responsibilities.push(item.to_string());
                ScanState::Open(record)
            }
            (ScanState::Idle, Some(_)) => ScanState::Idle,
            (state, None) => match first_keyword(&line, vocabulary.job_titles) {
                Some(title) => {
                    if let ScanState::Open(record) = state {
                        emitted.push(record.close(vocabulary));
                    }
                    ScanState::Open(OpenRecord::from_title_line(&line, title, current_year))
                }
                None => state,
            },
        };
    }

    if let ScanState::Open(record) = state {
        emitted.push(record.close(vocabulary));
    }
    emitted
}

fn parse_duration(line: &str, current_year: i32) -> (String, u32) {
    let Some(caps) = DURATION.captures(line) else {
        return (UNKNOWN.to_string(), 1);
    };
    let start: i32 = caps[1].parse().unwrap_or(current_year);
    let end: i32 = match caps[2].to_lowercase().as_str() {
        "present" | "current" => current_year,
        year => year.parse().unwrap_or(current_year),
    };
    let years = (end - start).max(1) as u32;
    (caps[0].to_string(), years)
}

fn parse_company(line: &str) -> String {
    COMPANY
        .captures(line)
        .and_then(|c| c.name("name"))
        .map(|m| trim_trailing_punctuation(m.as_str()).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}
