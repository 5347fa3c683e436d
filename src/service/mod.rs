use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::chapters::{self, extract_chapters};
use crate::extractors::{VideoDetails, VideoSource};
use crate::transcript::{compute_stats, group_by_chapters, ChapterGroup, TranscriptStats};
use crate::video_id::parse_video_id;
use crate::{Result, ViewerError};

/// Everything the presentation layer needs for one video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptView {
    pub video_id: String,
    pub video_title: String,
    pub grouped_transcript: Vec<ChapterGroup>,
    pub transcript_stats: TranscriptStats,
}

impl TranscriptView {
    /// True when the transcript was split using description chapters
    pub fn has_chapters(&self) -> bool {
        !(self.grouped_transcript.len() == 1
            && self.grouped_transcript[0].title == crate::transcript::DEFAULT_GROUP_TITLE
            && self.grouped_transcript[0].start_time_sec == 0)
    }
}

/// Loads a transcript for user input and shapes it into chapters and stats
pub struct TranscriptService {
    source: Box<dyn VideoSource>,
    languages: Vec<String>,
    show_progress: bool,
}

impl TranscriptService {
    pub fn new(source: Box<dyn VideoSource>, languages: Vec<String>) -> Self {
        Self {
            source,
            languages,
            show_progress: false,
        }
    }

    /// Show a spinner while the source is working
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Resolve `input` to a video, fetch its data and build the view.
    ///
    /// Invalid input fails before anything is fetched. A missing transcript is an
    /// error; a missing description only means the video has no chapters.
    pub async fn load(&self, input: &str) -> Result<TranscriptView> {
        let video_id =
            parse_video_id(input.trim()).ok_or_else(|| ViewerError::InvalidIdentifier(input.to_string()))?;

        tracing::info!("Loading transcript for {} via {}", video_id, self.source.source_name());

        let progress = self.spinner("Fetching transcript...");

        let transcript = match self.source.fetch_transcript(&video_id, &self.languages).await {
            Ok(transcript) => transcript,
            Err(e) => {
                progress.finish_and_clear();
                return Err(match e.downcast::<ViewerError>() {
                    Ok(viewer_error) => viewer_error.into(),
                    Err(other) => ViewerError::TranscriptUnavailable(format!("{:#}", other)).into(),
                });
            }
        };

        progress.set_message("Fetching video details...");
        let details = self.fetch_details_or_default(&video_id).await;
        progress.finish_and_clear();

        let chapters = extract_chapters(&details.description);
        if !chapters::is_ascending(&chapters) {
            tracing::warn!("Chapter timestamps are not in ascending order; some chapters will be empty");
        }

        tracing::info!(
            "Fetched {} segments, {} chapters",
            transcript.len(),
            chapters.len()
        );

        Ok(TranscriptView {
            video_id,
            video_title: details.title,
            grouped_transcript: group_by_chapters(&transcript, &chapters),
            transcript_stats: compute_stats(&transcript),
        })
    }

    /// Details are best effort: any failure means no title and no chapters
    async fn fetch_details_or_default(&self, video_id: &str) -> VideoDetails {
        match self.source.fetch_details(video_id).await {
            Ok(details) => details,
            Err(e) => {
                tracing::warn!("Could not fetch video details, continuing without chapters: {:#}", e);
                VideoDetails::default()
            }
        }
    }

    fn spinner(&self, message: &'static str) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let progress = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            progress.set_style(style);
        }
        progress.set_message(message);
        progress.enable_steady_tick(Duration::from_millis(100));
        progress
    }
}
