use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chapterscribe::cli::{Cli, Commands, OutputFormat};
use chapterscribe::config::Config;
use chapterscribe::extractors::{self, file};
use chapterscribe::output;
use chapterscribe::service::TranscriptService;
use chapterscribe::{compute_stats, extract_chapters, parse_video_id, utils, ViewerError};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "chapterscribe=debug" } else { "chapterscribe=info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Transcript {
            input,
            source_file,
            output,
            format,
            language,
            timestamps,
        } => {
            let config = Config::load().await?;

            // Check for the helper programs (non-fatal, they may live outside PATH checks)
            if source_file.is_none() {
                let missing_deps = utils::check_dependencies(&config.provider).await;
                if !missing_deps.is_empty() {
                    eprintln!("⚠️  Dependency check warnings:");
                    for dep in missing_deps {
                        eprintln!("   • {}", dep);
                    }
                    eprintln!("   (Continuing anyway - tools may be available)");
                }
            }

            let format = match format {
                Some(format) => format,
                None => config
                    .app
                    .default_output_format
                    .parse::<OutputFormat>()
                    .map_err(|e| ViewerError::ConfigError(format!("default_output_format: {}", e)))?,
            };
            let languages = match language {
                Some(lang) => vec![lang],
                None => config.provider.languages.clone(),
            };
            let show_timestamps = timestamps || config.app.show_timestamps;

            let source = extractors::create_source(&config, source_file.as_deref());
            let service = TranscriptService::new(source, languages).with_progress(!cli.quiet);

            let view = service.load(&input).await?;

            match output {
                Some(path) => {
                    output::save_to_file(&view, &path, &format, show_timestamps)?;
                    println!("Transcript saved to: {}", path.display());
                }
                None => {
                    output::print_to_console(&view, &format, show_timestamps)?;
                }
            }
        }
        Commands::Chapters { file, json } => {
            let description = match file {
                Some(path) => fs_err::read_to_string(&path)?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buffer)
                        .context("Failed to read description from stdin")?;
                    buffer
                }
            };

            let chapters = extract_chapters(&description);

            if json {
                println!("{}", serde_json::to_string_pretty(&chapters)?);
            } else if chapters.is_empty() {
                println!("No chapters found");
            } else {
                println!("{}", output::format_chapters_as_text(&chapters));
            }
        }
        Commands::VideoId { input } => {
            let video_id = parse_video_id(input.trim()).ok_or_else(|| ViewerError::InvalidIdentifier(input.clone()))?;
            println!("{}", video_id);
        }
        Commands::Stats { file: path, json } => {
            let document = file::load_document(&path).await?;
            let stats = compute_stats(&document.transcript);

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("{}", output::format_stats_line(&stats));
            }
        }
        Commands::Config { show } => {
            let config = Config::load().await?;
            if show {
                config.display();
            } else {
                println!("Configuration file:");
                println!("  {}", Config::config_path()?.display());
                println!("Edit it to change the helper programs, languages and output defaults.");
            }
        }
    }

    Ok(())
}
