use anyhow::{Context, Result};
use console::style;

use crate::chapters::ChapterMarker;
use crate::service::TranscriptView;
use crate::transcript::TranscriptStats;
use crate::utils::{format_duration, format_timestamp};

/// One-line summary of the reading statistics
pub fn format_stats_line(stats: &TranscriptStats) -> String {
    format!(
        "{} words | {} | {} wpm",
        stats.total_words,
        format_duration(stats.duration_seconds),
        stats.words_per_minute
    )
}

/// Plain text: chapter headings followed by their segments
pub fn format_as_text(view: &TranscriptView, include_timestamps: bool, styled: bool) -> String {
    let emphasize = |text: String| {
        if styled {
            style(text).bold().to_string()
        } else {
            text
        }
    };

    let mut out = String::new();

    if !view.video_title.is_empty() {
        out.push_str(&emphasize(view.video_title.clone()));
        out.push('\n');
    }
    out.push_str(&format_stats_line(&view.transcript_stats));
    out.push('\n');

    for group in &view.grouped_transcript {
        out.push('\n');
        out.push_str(&emphasize(format!(
            "== {} ({}) ==",
            group.title,
            format_timestamp(group.start_time_sec)
        )));
        out.push('\n');

        for segment in &group.segments {
            if include_timestamps {
                out.push_str(&format!("[{}] ", format_timestamp(segment.offset_ms / 1000)));
            }
            out.push_str(segment.text.trim());
            out.push('\n');
        }
    }

    out
}

/// Pretty JSON in the shape the web front end consumed
pub fn format_as_json(view: &TranscriptView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize transcript")
}

/// Markdown with a table of contents and one section per chapter
pub fn format_as_markdown(view: &TranscriptView, include_timestamps: bool) -> String {
    let mut out = String::new();

    let title = if view.video_title.is_empty() {
        view.video_id.as_str()
    } else {
        view.video_title.as_str()
    };
    out.push_str(&format!("# {}\n\n", title));
    out.push_str(&format!("_{}_\n\n", format_stats_line(&view.transcript_stats)));

    if view.has_chapters() {
        out.push_str("## Contents\n\n");
        for group in &view.grouped_transcript {
            out.push_str(&format!("- {} {}\n", format_timestamp(group.start_time_sec), group.title));
        }
        out.push('\n');
    }

    for group in &view.grouped_transcript {
        out.push_str(&format!("## {}\n\n", group.title));

        let lines: Vec<String> = group
            .segments
            .iter()
            .map(|segment| {
                if include_timestamps {
                    format!("`{}` {}", format_timestamp(segment.offset_ms / 1000), segment.text.trim())
                } else {
                    segment.text.trim().to_string()
                }
            })
            .collect();

        if include_timestamps {
            out.push_str(&lines.join("  \n"));
        } else {
            out.push_str(&lines.join(" "));
        }
        out.push_str("\n\n");
    }

    out
}

/// Chapter list written back in description form, one `m:ss Title` per line
pub fn format_chapters_as_text(chapters: &[ChapterMarker]) -> String {
    chapters
        .iter()
        .map(|chapter| format!("{} {}", format_timestamp(chapter.start_time_sec), chapter.title))
        .collect::<Vec<_>>()
        .join("\n")
}
