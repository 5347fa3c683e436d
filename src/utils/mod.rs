use crate::config::ProviderConfig;

/// Format a position in the video the way chapter lists write it: `m:ss` or `h:mm:ss`
pub fn format_timestamp(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{}:{:02}", minutes, secs)
    }
}

/// Format duration in human-readable format
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Check that the configured helper programs can be started
pub async fn check_dependencies(provider: &ProviderConfig) -> Vec<String> {
    let mut missing = Vec::new();

    if !check_command_on_path(&provider.transcript_command) {
        missing.push(format!(
            "{} - required to fetch transcripts",
            provider.transcript_command
        ));
    }

    if !check_command_available(&provider.details_command).await {
        missing.push(format!(
            "{} - recommended for video titles and chapters",
            provider.details_command
        ));
    }

    missing
}

/// Check if a command is available in PATH and answers `--version`
async fn check_command_available(command: &str) -> bool {
    use tokio::process::Command;

    Command::new(command)
        .arg("--version")
        .output()
        .await
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Check if a command resolves to an executable without running it; helper scripts rarely support `--version`
fn check_command_on_path(command: &str) -> bool {
    which::which(command).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "0:00");
        assert_eq!(format_timestamp(90), "1:30");
        assert_eq!(format_timestamp(754), "12:34");
        assert_eq!(format_timestamp(3723), "1:02:03");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30), "30s");
        assert_eq!(format_duration(90), "1m 30s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
    }

    #[tokio::test]
    async fn test_check_dependencies_reports_missing_programs() {
        let provider = ProviderConfig {
            transcript_command: "definitely-not-a-real-program-xyz".to_string(),
            transcript_args: Vec::new(),
            details_command: "also-not-a-real-program-xyz".to_string(),
            languages: vec!["en".to_string()],
            timeout_seconds: 5,
        };

        let missing = check_dependencies(&provider).await;
        assert_eq!(missing.len(), 2);
        assert!(missing[0].starts_with("definitely-not-a-real-program-xyz"));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_command_on_path() {
        assert!(check_command_on_path("sh"));
        assert!(!check_command_on_path("definitely-not-a-real-program-xyz"));
    }
}
