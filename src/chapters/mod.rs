//! Chapter markers parsed from a video description
//!
//! Creators list chapters as lines such as `0:00 Intro` or `(1:02:03) Q&A`.
//! A single timestamp-looking line is not enough evidence of a chapter list,
//! so fewer than two matches yield no chapters at all.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Minimum number of timestamp lines before a description counts as a chapter list
pub const MIN_CHAPTERS: usize = 2;

/// Optional `(`, `MM:SS` or `HH:MM:SS`, optional `)`, whitespace, title
static CHAPTER_LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\(?([0-9]{1,2}:[0-9]{2}(?::[0-9]{2})?)\)?\s+(.+)$")
        .expect("Invalid chapter line regex")
});

/// A named point in the video timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterMarker {
    /// Chapter title, trimmed and non-empty
    pub title: String,

    /// Start of the chapter in seconds
    #[serde(rename = "startTime")]
    pub start_time_sec: u64,
}

impl ChapterMarker {
    pub fn new(title: impl Into<String>, start_time_sec: u64) -> Self {
        Self {
            title: title.into(),
            start_time_sec,
        }
    }
}

/// Extract chapter markers from a free-text description.
///
/// Markers keep the order of their lines; they are not sorted by time.
pub fn extract_chapters(description: &str) -> Vec<ChapterMarker> {
    let chapters: Vec<ChapterMarker> = description.split('\n').filter_map(parse_chapter_line).collect();

    if chapters.len() < MIN_CHAPTERS {
        if !chapters.is_empty() {
            tracing::debug!("Ignoring lone timestamp line, not a chapter list");
        }
        return Vec::new();
    }

    tracing::debug!("Extracted {} chapters from description", chapters.len());
    chapters
}

/// Parse a single description line into a marker
fn parse_chapter_line(line: &str) -> Option<ChapterMarker> {
    let caps = CHAPTER_LINE_PATTERN.captures(line.trim())?;
    let start_time_sec = parse_timestamp(&caps[1])?;
    let title = caps[2].trim();

    if title.is_empty() {
        return None;
    }

    Some(ChapterMarker::new(title, start_time_sec))
}

/// Convert `MM:SS` or `HH:MM:SS` into seconds.
///
/// Components are not range checked, so `1:75` is 135 seconds.
pub fn parse_timestamp(timestamp: &str) -> Option<u64> {
    let parts = timestamp
        .split(':')
        .map(|part| part.parse::<u64>().ok())
        .collect::<Option<Vec<_>>>()?;

    match parts.as_slice() {
        [h, m, s] => h.checked_mul(3600)?.checked_add(m.checked_mul(60)?)?.checked_add(*s),
        [m, s] => m.checked_mul(60)?.checked_add(*s),
        _ => None,
    }
}

/// True when every chapter starts strictly after the previous one
pub fn is_ascending(chapters: &[ChapterMarker]) -> bool {
    chapters
        .windows(2)
        .all(|pair| pair[0].start_time_sec < pair[1].start_time_sec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_timestamps() {
        let chapters = extract_chapters("(0:00) Intro\n(1:30) Main");
        assert_eq!(
            chapters,
            vec![ChapterMarker::new("Intro", 0), ChapterMarker::new("Main", 90)]
        );
    }

    #[test]
    fn test_typical_description() {
        let description = "\
Thanks for watching! Links below.

00:00 Welcome
02:15 Setting up the project
1:02:03 Questions and answers

Follow me elsewhere.";

        let chapters = extract_chapters(description);
        assert_eq!(chapters.len(), 3);
        assert_eq!(chapters[0], ChapterMarker::new("Welcome", 0));
        assert_eq!(chapters[1], ChapterMarker::new("Setting up the project", 135));
        assert_eq!(chapters[2], ChapterMarker::new("Questions and answers", 3723));
    }

    #[test]
    fn test_single_timestamp_is_not_a_chapter_list() {
        assert!(extract_chapters("Best moment at 3:14 lol\n3:14 the drop").is_empty());
        assert!(extract_chapters("0:00 Only one").is_empty());
    }

    #[test]
    fn test_empty_description() {
        assert!(extract_chapters("").is_empty());
        assert!(extract_chapters("no timestamps here\nat all").is_empty());
    }

    #[test]
    fn test_indented_lines_and_crlf() {
        let chapters = extract_chapters("  0:00   Intro  \r\n\t0:45 Outro\r\n");
        assert_eq!(
            chapters,
            vec![ChapterMarker::new("Intro", 0), ChapterMarker::new("Outro", 45)]
        );
    }

    #[test]
    fn test_timestamp_must_lead_the_line() {
        let chapters = extract_chapters("Intro 0:00\nMain 1:00\n0:00 Real\n1:00 Also real");
        assert_eq!(chapters.len(), 2);
        assert_eq!(chapters[0].title, "Real");
    }

    #[test]
    fn test_timestamp_without_title_is_ignored() {
        assert!(extract_chapters("0:00\n1:00").is_empty());
        assert!(extract_chapters("0:00 \n1:00 Main").is_empty());
    }

    #[test]
    fn test_order_preserved_not_sorted() {
        let chapters = extract_chapters("5:00 Later\n0:00 Earlier");
        assert_eq!(chapters[0].start_time_sec, 300);
        assert_eq!(chapters[1].start_time_sec, 0);
        assert!(!is_ascending(&chapters));
    }

    #[test]
    fn test_out_of_range_components_are_accepted() {
        let chapters = extract_chapters("0:00 Start\n1:75 Odd\n99:99 Late");
        assert_eq!(chapters[1].start_time_sec, 135);
        assert_eq!(chapters[2].start_time_sec, 99 * 60 + 99);
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_timestamp("0:00"), Some(0));
        assert_eq!(parse_timestamp("12:34"), Some(754));
        assert_eq!(parse_timestamp("1:00:00"), Some(3600));
        assert_eq!(parse_timestamp("1:2:3:4"), None);
        assert_eq!(parse_timestamp("ab:cd"), None);
    }

    #[test]
    fn test_parse_timestamp_overflow() {
        assert_eq!(parse_timestamp("18446744073709551615:00"), None);
        assert_eq!(parse_timestamp("5124095576030432:00:00"), None);
        assert_eq!(parse_timestamp("0:18446744073709551615"), Some(u64::MAX));
    }

    #[test]
    fn test_is_ascending() {
        assert!(is_ascending(&[]));
        assert!(is_ascending(&[ChapterMarker::new("A", 0), ChapterMarker::new("B", 30)]));
        assert!(!is_ascending(&[ChapterMarker::new("A", 30), ChapterMarker::new("B", 30)]));
    }

    #[test]
    fn test_serializes_with_start_time_key() {
        let json = serde_json::to_value(ChapterMarker::new("Intro", 90)).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Intro", "startTime": 90}));
    }
}
