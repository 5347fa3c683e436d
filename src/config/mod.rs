use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::ViewerError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where raw transcripts and descriptions come from
    pub provider: ProviderConfig,

    /// Application settings
    pub app: AppConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Program printing a JSON transcript for `<video_id> <lang>`
    pub transcript_command: String,

    /// Extra arguments placed before the video ID
    #[serde(default)]
    pub transcript_args: Vec<String>,

    /// Program providing title and description (yt-dlp compatible)
    pub details_command: String,

    /// Preferred transcript languages, most preferred first
    pub languages: Vec<String>,

    /// Upper bound for each external call
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default output format
    pub default_output_format: String,

    /// Show segment timestamps in text output
    pub show_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig {
                transcript_command: "yt-transcript".to_string(),
                transcript_args: Vec::new(),
                details_command: "yt-dlp".to_string(),
                languages: vec!["en".to_string()],
                timeout_seconds: 60,
            },
            app: AppConfig {
                default_output_format: "text".to_string(),
                show_timestamps: false,
            },
        }
    }
}

impl Config {
    /// Load configuration from file or create default
    pub async fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            if let Err(e) = config.save_to(&config_path) {
                tracing::warn!("Could not write default config: {:#}", e);
            }
            Ok(config)
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs_err::read_to_string(path).context("Failed to read config file")?;

        let config: Config = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs_err::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;

        fs_err::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Get configuration file path
    pub fn config_path() -> Result<PathBuf> {
        // First try current directory for easy testing
        let local_config = PathBuf::from("config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join("chapterscribe").join("config.yaml"))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.provider.transcript_command.trim().is_empty() {
            return Err(ViewerError::ConfigError("transcript_command must be set".into()).into());
        }

        if self.provider.details_command.trim().is_empty() {
            return Err(ViewerError::ConfigError("details_command must be set".into()).into());
        }

        if self.provider.languages.is_empty() {
            return Err(ViewerError::ConfigError("at least one language is required".into()).into());
        }

        if self.provider.timeout_seconds == 0 {
            return Err(ViewerError::ConfigError("timeout_seconds must be positive".into()).into());
        }

        Ok(())
    }

    /// Display current configuration
    pub fn display(&self) {
        println!("Current Configuration:");
        println!("  Transcript Command: {}", self.provider.transcript_command);
        if !self.provider.transcript_args.is_empty() {
            println!("  Transcript Args: {}", self.provider.transcript_args.join(" "));
        }
        println!("  Details Command: {}", self.provider.details_command);
        println!("  Languages: {}", self.provider.languages.join(", "));
        println!("  Timeout: {}s", self.provider.timeout_seconds);
        println!("  Default Format: {}", self.app.default_output_format);
        println!("  Timestamps: {}", self.app.show_timestamps);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.provider.languages = vec!["de".to_string(), "en".to_string()];
        config.provider.transcript_args = vec!["transcript.py".to_string()];
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_transcript_args_default_to_empty() {
        let yaml = "\
provider:
  transcript_command: python3
  details_command: yt-dlp
  languages: [en]
  timeout_seconds: 30
app:
  default_output_format: json
  show_timestamps: true
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(config.provider.transcript_args.is_empty());
        assert_eq!(config.app.default_output_format, "json");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.provider.languages.clear();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.provider.timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.provider.transcript_command = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("transcript_command"));
    }
}
