//! Readability command — standalone 0-100 scoring.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use docpulse_core::analyze;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use super::read_input_file;

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug)]
pub struct ReadabilityArgs {
    /// Text file to score.
    pub file: Utf8PathBuf,

    /// Minimum acceptable readability score (0-100).
    #[arg(long)]
    pub min: Option<u8>,
}

/// Score readability of a file on the 0-100 scale (higher is easier).
#[instrument(name = "cmd_readability", skip_all, fields(file = %args.file))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    config_min: Option<u8>,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, min = ?args.min, "executing readability command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let report = analyze(&content);
    let min = args.min.or(config_min);

    if global_json {
        let payload = serde_json::json!({
            "file": args.file,
            "readability_score": report.readability_score,
            "min": min,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    match min {
        Some(min) if report.readability_score < min => {
            bail!(
                "{} scores {} (min: {}). Simplify sentences or shorten words.",
                args.file,
                report.readability_score,
                min,
            );
        }
        Some(min) => {
            println!(
                "{} {} scores {} (min: {})",
                "PASS:".green(),
                args.file,
                report.readability_score,
                min,
            );
        }
        None => println!("{}", report.readability_score),
    }

    Ok(())
}
