use serde::{Deserialize, Serialize};

use crate::chapters::ChapterMarker;

pub mod stats;

pub use stats::{compute_stats, TranscriptStats};

/// Title of the single group used when a video has no chapters
pub const DEFAULT_GROUP_TITLE: &str = "Transcript";

/// One timed utterance from the transcript provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Spoken text
    pub text: String,

    /// Start of the utterance in milliseconds
    #[serde(rename = "offset")]
    pub offset_ms: u64,

    /// Length of the utterance in milliseconds (absent means zero)
    #[serde(rename = "duration", default)]
    pub duration_ms: u64,
}

impl TranscriptSegment {
    pub fn new(text: impl Into<String>, offset_ms: u64, duration_ms: u64) -> Self {
        Self {
            text: text.into(),
            offset_ms,
            duration_ms,
        }
    }

    /// End of the utterance in milliseconds
    pub fn end_ms(&self) -> u64 {
        self.offset_ms.saturating_add(self.duration_ms)
    }
}

/// Transcript segments belonging to one chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterGroup {
    pub title: String,

    #[serde(rename = "startTime")]
    pub start_time_sec: u64,

    pub segments: Vec<TranscriptSegment>,
}

/// Partition a transcript into one group per chapter.
///
/// Chapter `i` owns the segments whose offset falls in
/// `[chapters[i].start, chapters[i + 1].start)`; the last chapter has no upper bound.
/// Chapters are taken in the order given and every chapter yields a group, even an
/// empty one. Without chapters the whole transcript becomes a single `"Transcript"` group.
pub fn group_by_chapters(transcript: &[TranscriptSegment], chapters: &[ChapterMarker]) -> Vec<ChapterGroup> {
    if chapters.is_empty() {
        return vec![ChapterGroup {
            title: DEFAULT_GROUP_TITLE.to_string(),
            start_time_sec: 0,
            segments: transcript.to_vec(),
        }];
    }

    chapters
        .iter()
        .enumerate()
        .map(|(i, chapter)| {
            let start_ms = chapter.start_time_sec.saturating_mul(1000);
            let end_ms = chapters.get(i + 1).map(|next| next.start_time_sec.saturating_mul(1000));

            let segments: Vec<TranscriptSegment> = transcript
                .iter()
                .filter(|segment| {
                    segment.offset_ms >= start_ms && end_ms.map_or(true, |end| segment.offset_ms < end)
                })
                .cloned()
                .collect();

            tracing::trace!("Chapter '{}' holds {} segments", chapter.title, segments.len());

            ChapterGroup {
                title: chapter.title.clone(),
                start_time_sec: chapter.start_time_sec,
                segments,
            }
        })
        .collect()
}
