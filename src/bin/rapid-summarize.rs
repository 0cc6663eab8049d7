//! Command-line summarizer
//!
//! Reads a UTF-8 document from a file or stdin and writes its summary to
//! stdout or to `--output`.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use rapid_summarize::{
    ratio_from_percent, word_count, Strategy, Summarizer, SummarizerConfig, Summary, SummarySpec,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rapid-summarize", version, about = "Extractive text summarization")]
struct Cli {
    /// Text file to summarize (stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Strategy: frequency, lemma-frequency or graph
    #[arg(short, long)]
    method: Option<String>,

    /// Summary length as a percentage of eligible sentences
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(10..=90))]
    percent: Option<u32>,

    /// Minimum sentence length in characters
    #[arg(short = 'l', long, value_parser = RangedU64ValueParser::<usize>::new().range(5..=100))]
    min_length: Option<usize>,

    /// JSON summary spec with defaults for every option
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the summary to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the full summary record as JSON
    #[arg(long)]
    json: bool,

    /// List the available strategies and exit
    #[arg(long)]
    strategies: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<SummarizerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            SummarySpec::from_json(&json)?.to_config()?
        }
        None => SummarizerConfig::default(),
    };

    if let Some(method) = &cli.method {
        config.strategy = method.parse()?;
    }
    if let Some(percent) = cli.percent {
        config.ratio = ratio_from_percent(percent)?;
    }
    if let Some(min_length) = cli.min_length {
        config.min_sentence_length = min_length;
    }
    Ok(config)
}

/// Summarize `text` with `config`; `None` when the input holds no text
fn summarize(config: SummarizerConfig, text: &str) -> anyhow::Result<Option<Summary>> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    let summary = Summarizer::with_config(config)?.run(text)?;
    tracing::info!(
        strategy = %summary.strategy,
        sentences = summary.total_sentences,
        eligible = summary.eligible_sentences,
        selected = summary.sentences.len(),
        "done"
    );
    Ok(Some(summary))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.strategies {
        for strategy in Strategy::ALL {
            println!("{:<16} {}", strategy.as_str(), strategy.description());
        }
        return Ok(());
    }

    let config = build_config(&cli)?;
    let text = read_input(cli.input.as_ref())?;
    let Some(summary) = summarize(config, &text)? else {
        tracing::info!("no text to summarize");
        return Ok(());
    };

    let rendered = if cli.json {
        serde_json::to_string_pretty(&summary)?
    } else {
        summary.text.clone()
    };

    match &cli.output {
        Some(path) => fs::write(path, format!("{rendered}\n"))
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
        }
    }

    eprintln!(
        "Input Words: {} | Summary Words: {}",
        word_count(&text),
        word_count(&summary.text)
    );
    Ok(())
}
