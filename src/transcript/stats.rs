use serde::{Deserialize, Serialize};

use super::TranscriptSegment;

/// Aggregate speaking-rate figures for a transcript
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptStats {
    /// Words per minute, rounded
    #[serde(rename = "wpm")]
    pub words_per_minute: u64,

    /// Whitespace-delimited words across all segments
    pub total_words: u64,

    /// Transcript length in seconds, rounded
    pub duration_seconds: u64,
}

/// Compute word count, duration and words per minute for a transcript.
///
/// Duration runs to the end of the last segment in transcript order. The rate is
/// taken over the unrounded duration; only the reported duration is rounded.
pub fn compute_stats(transcript: &[TranscriptSegment]) -> TranscriptStats {
    let Some(last) = transcript.last() else {
        return TranscriptStats::default();
    };

    let total_words: u64 = transcript.iter().map(|segment| count_words(&segment.text)).sum();
    let duration_secs = last.end_ms() as f64 / 1000.0;

    let words_per_minute = if duration_secs > 0.0 {
        (total_words as f64 / duration_secs * 60.0).round() as u64
    } else {
        0
    };

    TranscriptStats {
        words_per_minute,
        total_words,
        duration_seconds: duration_secs.round() as u64,
    }
}

/// Count whitespace-delimited words
pub fn count_words(text: &str) -> u64 {
    text.split_whitespace().count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_transcript() {
        assert_eq!(
            compute_stats(&[]),
            TranscriptStats {
                words_per_minute: 0,
                total_words: 0,
                duration_seconds: 0
            }
        );
    }

    #[test]
    fn test_basic_stats() {
        let transcript = vec![
            TranscriptSegment::new("Hello world", 0, 2000),
            TranscriptSegment::new("This is a test", 2000, 3000),
        ];
        let stats = compute_stats(&transcript);

        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.duration_seconds, 5);
        assert_eq!(stats.words_per_minute, 72);
    }

    #[test]
    fn test_whitespace_handling() {
        let transcript = vec![
            TranscriptSegment::new("  spaced   out\twords\n", 0, 1000),
            TranscriptSegment::new("   ", 1000, 1000),
            TranscriptSegment::new("", 2000, 1000),
        ];
        let stats = compute_stats(&transcript);

        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.duration_seconds, 3);
        assert_eq!(stats.words_per_minute, 60);
    }

    #[test]
    fn test_zero_duration() {
        let transcript = vec![TranscriptSegment::new("words but no time", 0, 0)];
        let stats = compute_stats(&transcript);

        assert_eq!(stats.total_words, 4);
        assert_eq!(stats.duration_seconds, 0);
        assert_eq!(stats.words_per_minute, 0);
    }

    #[test]
    fn test_rate_uses_unrounded_duration() {
        // 400ms rounds to 0s but the rate is still 1 word / 0.4s = 150 wpm
        let transcript = vec![TranscriptSegment::new("hi", 0, 400)];
        let stats = compute_stats(&transcript);

        assert_eq!(stats.duration_seconds, 0);
        assert_eq!(stats.words_per_minute, 150);
    }

    #[test]
    fn test_duration_rounds_half_up() {
        let transcript = vec![TranscriptSegment::new("one two three", 1000, 1500)];
        let stats = compute_stats(&transcript);

        // 2.5s rounds to 3; 3 words / 2.5s * 60 = 72
        assert_eq!(stats.duration_seconds, 3);
        assert_eq!(stats.words_per_minute, 72);
    }

    #[test]
    fn test_duration_comes_from_last_segment() {
        let transcript = vec![
            TranscriptSegment::new("long one", 0, 60_000),
            TranscriptSegment::new("short tail", 10_000, 2_000),
        ];
        let stats = compute_stats(&transcript);

        assert_eq!(stats.duration_seconds, 12);
        assert_eq!(stats.words_per_minute, 20);
    }

    #[test]
    fn test_stats_are_idempotent() {
        let transcript = vec![TranscriptSegment::new("same input twice", 0, 3000)];
        assert_eq!(compute_stats(&transcript), compute_stats(&transcript));
    }

    #[test]
    fn test_serializes_with_source_keys() {
        let stats = TranscriptStats {
            words_per_minute: 72,
            total_words: 6,
            duration_seconds: 5,
        };
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({"wpm": 72, "totalWords": 6, "durationSeconds": 5})
        );
    }
}
