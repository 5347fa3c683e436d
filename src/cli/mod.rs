use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "chapterscribe",
    about = "Chapterscribe - Read YouTube transcripts split into the chapters from the video description",
    version,
    long_about = "Fetches the transcript of a YouTube video, groups it by the chapter timestamps listed in the video description and reports words-per-minute statistics. Transcript retrieval is delegated to a helper program and yt-dlp."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a transcript and group it by chapters
    Transcript {
        /// YouTube URL or 11-character video ID
        #[arg(value_name = "URL_OR_ID")]
        input: String,

        /// Read a saved transcript document instead of running the helper programs
        #[arg(long, value_name = "FILE")]
        source_file: Option<PathBuf>,

        /// Output file path (prints to console if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Preferred transcript language (overrides the configured list)
        #[arg(short, long, value_name = "LANG")]
        language: Option<String>,

        /// Include segment timestamps in text and markdown output
        #[arg(long)]
        timestamps: bool,
    },

    /// Extract chapter markers from a video description
    Chapters {
        /// File holding the description (reads stdin if not specified)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Print chapters as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the canonical video ID for a URL or ID
    VideoId {
        /// YouTube URL or 11-character video ID
        #[arg(value_name = "URL_OR_ID")]
        input: String,
    },

    /// Compute reading statistics for a saved transcript
    Stats {
        /// Transcript document or segment array (JSON)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration
    Config {
        /// Show current configuration
        #[arg(short, long)]
        show: bool,
    },
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text grouped by chapter
    Text,
    /// JSON view with grouped transcript and stats
    Json,
    /// Markdown with a table of contents
    Markdown,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_transcript_command() {
        let cli = Cli::try_parse_from([
            "chapterscribe",
            "transcript",
            "dQw4w9WgXcQ",
            "--format",
            "markdown",
            "--timestamps",
        ])
        .unwrap();

        match cli.command {
            Commands::Transcript {
                input,
                format,
                timestamps,
                source_file,
                ..
            } => {
                assert_eq!(input, "dQw4w9WgXcQ");
                assert_eq!(format, Some(OutputFormat::Markdown));
                assert!(timestamps);
                assert!(source_file.is_none());
            }
            _ => panic!("expected transcript command"),
        }
    }

    #[test]
    fn test_output_format_from_config_string() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
