use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use relcanon_core::parser::TitleExtractor;
use relcanon_core::ExtractorConfig;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Parse release titles into canonical records, one JSON object per title.
#[derive(Parser)]
#[command(name = "relcanon-parse", version, about)]
struct Cli {
    /// Titles to parse. Reads one title per line from stdin when omitted.
    titles: Vec<String>,

    /// JSON file overriding the extractor vocabularies.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Pretty-print each record.
    #[arg(long)]
    pretty: bool,
}

fn load_config(path: Option<&PathBuf>) -> Result<ExtractorConfig> {
    let Some(path) = path else {
        return Ok(ExtractorConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = ExtractorConfig::from_json_str(&json)
        .with_context(|| format!("invalid config {}", path.display()))?;
    info!(path = %path.display(), "loaded extractor config");
    Ok(config)
}

fn emit(out: &mut impl Write, extractor: &TitleExtractor, title: &str, pretty: bool) -> Result<()> {
    let record = extractor.parse(title);
    debug!(title, parsed = record.is_some(), "title");
    let json = if pretty {
        serde_json::to_string_pretty(&record)?
    } else {
        serde_json::to_string(&record)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;
    let extractor = TitleExtractor::new(config).context("failed to build title extractor")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.titles.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            emit(&mut out, &extractor, line, cli.pretty)?;
        }
    } else {
        for title in &cli.titles {
            emit(&mut out, &extractor, title, cli.pretty)?;
        }
    }

    Ok(())
}
