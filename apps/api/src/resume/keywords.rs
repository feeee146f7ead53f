//! Text segmentation and whole-word keyword matching.

use once_cell::sync::Lazy;
use regex::Regex;

const BULLET_MARKERS: &[char] = &['-', '•', '*'];

/// A bullet that follows a sentence terminator on the same physical line,
/// e.g. `"... 2015-2020. - Led a team"`.
static INLINE_BULLET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([.;:!?])[ \t]+([-•*])[ \t]+").expect("valid inline bullet pattern"));

/// Splits resume text into logical lines. Blank lines are dropped; inline bullets
/// start a new line of their own.
pub fn segment_lines(text: &str) -> Vec<String> {
    let expanded = INLINE_BULLET.replace_all(text, "$1\n$2 ");
    expanded
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Returns the line content without its leading bullet marker, or `None` when the
/// line is not a bullet.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let rest = line.trim_start().strip_prefix(BULLET_MARKERS)?;
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Start offsets of every whole-word occurrence in text that is already lowercased.
fn word_starts<'t>(lower_text: &'t str, lower_keyword: &'t str) -> impl Iterator<Item = usize> + 't {
    lower_text
        .match_indices(lower_keyword)
        .filter(move |_| !lower_keyword.is_empty())
        .filter_map(move |(start, _)| {
            let end = start + lower_keyword.len();
            let before_ok = lower_text[..start]
                .chars()
                .next_back()
                .map_or(true, |c| !is_word_char(c));
            let after_ok = lower_text[end..]
                .chars()
                .next()
                .map_or(true, |c| !is_word_char(c));
            (before_ok && after_ok).then_some(start)
        })
}

fn find_word(lower_text: &str, lower_keyword: &str) -> Option<usize> {
    word_starts(lower_text, lower_keyword).next()
}

/// Returns the keywords of `vocabulary` that occur in `text`, in vocabulary order.
/// Each keyword is tested independently.
pub fn match_keywords<'a>(text: &str, vocabulary: &[&'a str]) -> Vec<&'a str> {
    let lower = text.to_lowercase();
    vocabulary
        .iter()
        .copied()
        .filter(|kw| find_word(&lower, &kw.to_lowercase()).is_some())
        .collect()
}

/// First keyword of `vocabulary` (in priority order) occurring in `text`.
pub fn first_keyword<'a>(text: &str, vocabulary: &[&'a str]) -> Option<&'a str> {
    let lower = text.to_lowercase();
    vocabulary
        .iter()
        .copied()
        .find(|kw| find_word(&lower, &kw.to_lowercase()).is_some())
}

/// Trims whitespace and dangling separators (`.`, dashes, `|`) from the end of a
/// captured name.
pub fn trim_trailing_punctuation(name: &str) -> &str {
    name.trim()
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '-' | '–' | '—' | '|'))
}

/// Byte offsets into `text` where any keyword of `vocabulary` starts as a whole word,
/// ascending and deduplicated. Keywords are expected to be ASCII.
pub fn keyword_offsets(text: &str, vocabulary: &[&str]) -> Vec<usize> {
    let lower = text.to_ascii_lowercase();
    let mut offsets: Vec<usize> = vocabulary
        .iter()
        .flat_map(|kw| word_starts(&lower, &kw.to_ascii_lowercase()).collect::<Vec<_>>())
        .collect();
    offsets.sort_unstable();
    offsets.dedup();
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains_keyword(text: &str, keyword: &str) -> bool {
        !match_keywords(text, &[keyword]).is_empty()
    }

    #[test]
    fn test_whole_word_match_is_case_insensitive() {
        assert!(contains_keyword("Built services in PYTHON and Go", "python"));
        assert!(contains_keyword("Built services in python", "Python"));
    }

    #[test]
    fn test_partial_word_does_not_match() {
        assert!(!contains_keyword("Javascript developer", "Java"));
        assert!(!contains_keyword("going forward", "Go"));
    }

    #[test]
    fn test_symbol_keywords_match() {
        assert!(contains_keyword("Modern C++ and C# work", "C++"));
        assert!(contains_keyword("Modern C++ and C# work", "C#"));
        assert!(contains_keyword("APIs with Node.js.", "Node.js"));
        assert!(contains_keyword("Set up CI/CD pipelines", "ci/cd"));
    }

    #[test]
    fn test_multi_word_keyword() {
        assert!(contains_keyword("Applied machine learning at scale", "Machine Learning"));
    }

    #[test]
    fn test_empty_text_matches_nothing() {
        assert!(match_keywords("", &["Python", "Rust"]).is_empty());
        assert!(!contains_keyword("", "Python"));
    }

    #[test]
    fn test_keywords_matched_independently() {
        let found = match_keywords("Spring Boot services", &["Spring", "Spring Boot", "Boot"]);
        assert_eq!(found, vec!["Spring", "Spring Boot", "Boot"]);
    }

    #[test]
    fn test_first_keyword_respects_priority() {
        let title = first_keyword("Senior Software Engineer", &["Software Engineer", "Engineer"]);
        assert_eq!(title, Some("Software Engineer"));
    }

    #[test]
    fn test_keyword_offsets_finds_every_whole_word_occurrence() {
        let text = "MBA, then a Master's; Mastery is not a master";
        assert_eq!(keyword_offsets(text, &["master", "mba"]), vec![0, 12, 39]);
        assert!(keyword_offsets("Scrummaster", &["master"]).is_empty());
    }

    #[test]
    fn test_trim_trailing_punctuation() {
        assert_eq!(trim_trailing_punctuation(" Acme Corp - "), "Acme Corp");
        assert_eq!(trim_trailing_punctuation("Initech |"), "Initech");
        assert_eq!(trim_trailing_punctuation("Globex Inc."), "Globex Inc");
        assert_eq!(trim_trailing_punctuation("--"), "");
    }

    #[test]
    fn test_segment_splits_inline_bullets() {
        let lines = segment_lines("Engineer at Acme, 2015-2020. - Led a team. - Shipped it");
        assert_eq!(
            lines,
            vec!["Engineer at Acme, 2015-2020.", "- Led a team.", "- Shipped it"]
        );
    }

    #[test]
    fn test_segment_keeps_date_ranges_and_drops_blank_lines() {
        let lines = segment_lines("Acme 2015 - 2020\n\n   \nNext");
        assert_eq!(lines, vec!["Acme 2015 - 2020", "Next"]);
    }

    #[test]
    fn test_strip_bullet_variants() {
        assert_eq!(strip_bullet("- Led a team"), Some("Led a team"));
        assert_eq!(strip_bullet("   • Shipped v2 "), Some("Shipped v2"));
        assert_eq!(strip_bullet("* Wrote docs"), Some("Wrote docs"));
        assert_eq!(strip_bullet("Plain line"), None);
        assert_eq!(strip_bullet(" - "), None);
    }
}
