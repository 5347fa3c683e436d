use anyhow::Result;
use std::path::Path;

use crate::cli::OutputFormat;
use crate::service::TranscriptView;

pub mod formatters;

pub use formatters::*;

fn render(view: &TranscriptView, format: &OutputFormat, include_timestamps: bool, styled: bool) -> Result<String> {
    let content = match format {
        OutputFormat::Text => format_as_text(view, include_timestamps, styled),
        OutputFormat::Json => format_as_json(view)?,
        OutputFormat::Markdown => format_as_markdown(view, include_timestamps),
    };

    Ok(content)
}

/// Save transcript view to file
pub fn save_to_file(view: &TranscriptView, path: &Path, format: &OutputFormat, include_timestamps: bool) -> Result<()> {
    let content = render(view, format, include_timestamps, false)?;

    fs_err::write(path, content)?;
    Ok(())
}

/// Print transcript view to console
pub fn print_to_console(view: &TranscriptView, format: &OutputFormat, include_timestamps: bool) -> Result<()> {
    let content = render(view, format, include_timestamps, console::colors_enabled())?;

    println!("{}", content);
    Ok(())
}
