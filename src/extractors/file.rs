use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{VideoDetails, VideoSource};
use crate::transcript::TranscriptSegment;
use crate::Result;

/// A saved provider response: transcript plus the raw title and description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceDocument {
    /// Video the document was captured for, if recorded
    #[serde(default)]
    pub video_id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub transcript: Vec<TranscriptSegment>,
}

/// Accepted transcript file layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptFile {
    Segments(Vec<TranscriptSegment>),
    Document(SourceDocument),
}

impl From<TranscriptFile> for SourceDocument {
    fn from(file: TranscriptFile) -> Self {
        match file {
            TranscriptFile::Document(document) => document,
            TranscriptFile::Segments(transcript) => SourceDocument {
                transcript,
                ..Default::default()
            },
        }
    }
}

/// Parse a saved document, either a full `{title, description, transcript}`
/// object or the bare segment array printed by the transcript helper.
pub fn parse_document(content: &str) -> Result<SourceDocument> {
    let file: TranscriptFile = serde_json::from_str(content).context("Failed to parse transcript document")?;
    Ok(file.into())
}

/// Read and parse a saved document from disk
pub async fn load_document(path: &Path) -> Result<SourceDocument> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_document(&content)
}

/// Source reading a previously saved document instead of calling out
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn document_for(&self, video_id: &str) -> Result<SourceDocument> {
        let document = load_document(&self.path).await?;

        if let Some(recorded) = document.video_id.as_deref() {
            if recorded != video_id {
                tracing::warn!(
                    "{} was saved for video {}, not {}",
                    self.path.display(),
                    recorded,
                    video_id
                );
            }
        }

        Ok(document)
    }
}

#[async_trait]
impl VideoSource for FileSource {
    async fn fetch_transcript(&self, video_id: &str, _languages: &[String]) -> Result<Vec<TranscriptSegment>> {
        Ok(self.document_for(video_id).await?.transcript)
    }

    async fn fetch_details(&self, video_id: &str) -> Result<VideoDetails> {
        let document = self.document_for(video_id).await?;
        Ok(VideoDetails {
            title: document.title,
            description: document.description,
        })
    }

    fn source_name(&self) -> &'static str {
        "saved document"
    }
}
