use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod command;
pub mod file;

use crate::config::Config;
use crate::transcript::TranscriptSegment;
use crate::Result;

/// Title and free-text description of a video
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoDetails {
    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

/// Trait for obtaining raw transcript and description data for a video.
///
/// Implementations delegate to something outside this crate (a helper program,
/// a saved document) and hand back data in the provider's shape.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VideoSource: Send + Sync {
    /// Fetch the ordered transcript segments for a video
    async fn fetch_transcript(&self, video_id: &str, languages: &[String]) -> Result<Vec<TranscriptSegment>>;

    /// Fetch the video title and description
    async fn fetch_details(&self, video_id: &str) -> Result<VideoDetails>;

    /// Get the name of this source
    fn source_name(&self) -> &'static str;
}

/// Build the source selected on the command line: a saved document if one was
/// given, otherwise the configured helper programs.
pub fn create_source(config: &Config, source_file: Option<&std::path::Path>) -> Box<dyn VideoSource> {
    match source_file {
        Some(path) => Box::new(file::FileSource::new(path)),
        None => Box::new(command::CommandSource::from_config(&config.provider)),
    }
}
