//! Analyze command — full readability and engagement report.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use docpulse_core::{AnalysisReport, SuggestionKind, analyze};
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::read_input_file;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Text file to analyze.
    pub file: Utf8PathBuf,

    /// Minimum acceptable readability score (0-100).
    #[arg(long)]
    pub min_readability: Option<u8>,

    /// Minimum acceptable engagement score (0-100).
    #[arg(long)]
    pub min_engagement: Option<u8>,
}

/// Run the full content analysis on a file.
#[instrument(name = "cmd_analyze", skip_all, fields(file = %args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_readability: Option<u8>,
    config_min_engagement: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing analyze command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analyze(&content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&args.file, &report);
    }

    // Score gates: flag-level overrides config-level
    let min_readability = args.min_readability.or(config_min_readability);
    let min_engagement = args.min_engagement.or(config_min_engagement);
    if let Some(min) = min_readability
        && report.readability_score < min
    {
        bail!(
            "{} readability {} is below minimum {} — simplify the text.",
            args.file,
            report.readability_score,
            min,
        );
    }
    if let Some(min) = min_engagement
        && report.engagement_score < min
    {
        bail!(
            "{} engagement {} is below minimum {} — apply the suggestions above.",
            args.file,
            report.engagement_score,
            min,
        );
    }

    Ok(())
}

fn print_report(file: &Utf8PathBuf, report: &AnalysisReport) {
    println!("{}", file.bold());

    println!(
        "\n  {} {} words, {} sentences, {} paragraphs",
        "Counts:".cyan(),
        report.word_count,
        report.sentence_count,
        report.paragraph_count,
    );
    println!(
        "  {} {:.1} chars/word, {}",
        "Density:".cyan(),
        report.avg_word_length,
        reading_time_label(report.reading_time_minutes),
    );
    println!(
        "  {} {}/100",
        "Readability:".cyan(),
        score_colored(report.readability_score),
    );
    println!(
        "  {} {}/100 — {}",
        "Engagement:".cyan(),
        score_colored(report.engagement_score),
        engagement_verdict(report.engagement_score),
    );

    println!("\n  {}", "Suggestions".bold());
    for suggestion in &report.suggestions {
        let tag = match suggestion.kind {
            SuggestionKind::Success => "ok".green().to_string(),
            SuggestionKind::Warning => "warn".yellow().to_string(),
            SuggestionKind::Error => "error".red().to_string(),
            SuggestionKind::Tip => "tip".blue().to_string(),
        };
        println!("    [{tag}] {}", suggestion.message);
    }
}

/// Human reading-time label with pluralization.
fn reading_time_label(minutes: usize) -> String {
    if minutes == 1 {
        "1 minute read".to_string()
    } else {
        format!("{minutes} minutes read")
    }
}

/// One-line engagement verdict by score band.
const fn engagement_verdict(score: u8) -> &'static str {
    match score {
        80.. => "highly engaging content",
        60..=79 => "good engagement potential with room for improvement",
        40..=59 => "fair engagement, consider the suggestions below",
        _ => "low engagement, follow the recommendations to improve",
    }
}

fn score_colored(score: u8) -> String {
    if score >= 80 {
        score.green().to_string()
    } else if score >= 60 {
        score.yellow().to_string()
    } else {
        score.red().to_string()
    }
}
