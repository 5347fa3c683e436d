//! Chapterscribe - read YouTube transcripts grouped by chapter
//!
//! This library turns a video URL or ID into a transcript split into the chapters
//! listed in the video description, together with simple reading-speed statistics.
//! Fetching the raw transcript and description is delegated to external tools.

pub mod chapters;
pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod service;
pub mod transcript;
pub mod utils;
pub mod video_id;

pub use chapters::{extract_chapters, ChapterMarker};
pub use cli::{Cli, Commands, OutputFormat};
pub use config::Config;
pub use extractors::{VideoDetails, VideoSource};
pub use service::{TranscriptService, TranscriptView};
pub use transcript::{compute_stats, group_by_chapters, ChapterGroup, TranscriptSegment, TranscriptStats};
pub use video_id::parse_video_id;

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the transcript viewer
#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    #[error("Invalid YouTube URL or video ID: {0}")]
    InvalidIdentifier(String),

    #[error("Transcript unavailable: {0}")]
    TranscriptUnavailable(String),

    #[error("External source failed: {0}")]
    SourceFailed(String),

    #[error("{0} timed out after {1}s")]
    Timeout(String, u64),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
