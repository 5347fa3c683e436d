use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;

use super::{VideoDetails, VideoSource};
use crate::config::ProviderConfig;
use crate::transcript::TranscriptSegment;
use crate::{Result, ViewerError};

/// What the transcript helper prints on stdout
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HelperOutput {
    Segments(Vec<TranscriptSegment>),
    Failure { error: String },
}

/// Source backed by external programs: a transcript helper that prints JSON
/// segments, and yt-dlp for title and description.
pub struct CommandSource {
    transcript_program: String,
    transcript_args: Vec<String>,
    details_program: String,
    timeout: Duration,
}

impl CommandSource {
    pub fn new(transcript_program: impl Into<String>, details_program: impl Into<String>, timeout: Duration) -> Self {
        Self {
            transcript_program: transcript_program.into(),
            transcript_args: Vec::new(),
            details_program: details_program.into(),
            timeout,
        }
    }

    pub fn from_config(config: &ProviderConfig) -> Self {
        Self {
            transcript_program: config.transcript_command.clone(),
            transcript_args: config.transcript_args.clone(),
            details_program: config.details_command.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
        }
    }

    /// Run a program to completion, bounded by the configured timeout
    async fn run(&self, program: &str, args: &[String]) -> Result<Output> {
        tracing::debug!("Running {} {}", program, args.join(" "));

        let child = Command::new(program)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.timeout, child).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(ViewerError::SourceFailed(format!("could not run '{}': {}", program, e)).into()),
            Err(_) => Err(ViewerError::Timeout(program.to_string(), self.timeout.as_secs()).into()),
        }
    }

    fn watch_url(video_id: &str) -> String {
        format!("https://www.youtube.com/watch?v={}", video_id)
    }
}

#[async_trait]
impl VideoSource for CommandSource {
    async fn fetch_transcript(&self, video_id: &str, languages: &[String]) -> Result<Vec<TranscriptSegment>> {
        let fallback = ["en".to_string()];
        let languages = if languages.is_empty() { &fallback[..] } else { languages };

        let mut last_error = None;
        for language in languages {
            let mut args = self.transcript_args.clone();
            args.push(video_id.to_string());
            args.push(language.clone());

            let output = self.run(&self.transcript_program, &args).await?;
            match parse_helper_output(&output) {
                Ok(segments) => return Ok(segments),
                Err(e) if matches!(e.downcast_ref::<ViewerError>(), Some(ViewerError::TranscriptUnavailable(_))) => {
                    tracing::debug!("No '{}' transcript for {}: {}", language, video_id, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ViewerError::TranscriptUnavailable(video_id.to_string()).into()))
    }

    async fn fetch_details(&self, video_id: &str) -> Result<VideoDetails> {
        let args = vec![
            "--dump-json".to_string(),
            "--skip-download".to_string(),
            "--no-playlist".to_string(),
            Self::watch_url(video_id),
        ];

        let output = self.run(&self.details_program, &args).await?;

        if !output.status.success() {
            let error = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} failed: {}", self.details_program, error.trim());
        }

        let info: Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("Failed to parse {} output", self.details_program))?;

        Ok(VideoDetails {
            title: info["title"].as_str().unwrap_or_default().to_string(),
            description: info["description"].as_str().unwrap_or_default().to_string(),
        })
    }

    fn source_name(&self) -> &'static str {
        "helper command"
    }
}

/// Interpret the transcript helper's stdout and exit status
fn parse_helper_output(output: &Output) -> Result<Vec<TranscriptSegment>> {
    let parsed = serde_json::from_slice::<HelperOutput>(&output.stdout);

    match (output.status.success(), parsed) {
        (true, Ok(HelperOutput::Segments(segments))) => Ok(segments),
        (_, Ok(HelperOutput::Failure { error })) => Err(ViewerError::TranscriptUnavailable(error).into()),
        (true, Err(e)) => Err(anyhow::Error::new(e).context("Failed to parse transcript helper output")),
        (false, _) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = if stderr.trim().is_empty() {
                format!("transcript helper exited with {}", output.status)
            } else {
                stderr.trim().to_string()
            };
            Err(ViewerError::TranscriptUnavailable(message).into())
        }
    }
}
