//! Language detection self-test
//!
//! Runs the local language detector over the fixed sample messages and
//! prints, for each one, whether the detected language matches the expected
//! label and whether the backend supports it.

use clap::Parser;
use spam_diag::language::{LanguageDetector, ScriptProfile};
use spam_diag::samples::LANGUAGE_SAMPLES;
use spam_diag::{logging, DiagConfig};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "language-check")]
#[command(about = "Run the language detector over the sample messages", long_about = None)]
struct Cli {
    /// Config file (TOML), used for the log level only
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = DiagConfig::load(cli.config.as_deref())?;
    logging::init(&config.logging.level)?;

    let detector = LanguageDetector::new();

    println!("Testing language detection:");
    println!("{}", "-".repeat(50));
    for sample in &LANGUAGE_SAMPLES {
        let profile = ScriptProfile::analyze(sample.text);
        debug!("{}: {:?}", sample.label, profile);

        let detected = detector.detect(sample.text);
        let status = if detected.as_str() == sample.label {
            "✓"
        } else {
            "✗"
        };
        let preview: String = sample.text.chars().take(40).collect();
        println!(
            "{} {:<10} -> Detected: {:<10} | Message: {}...",
            status,
            sample.label.to_uppercase(),
            detected,
            preview
        );
    }
    println!("{}", "-".repeat(50));

    println!("\nChecking supported languages:");
    println!("{}", "-".repeat(50));
    for sample in &LANGUAGE_SAMPLES {
        let detected = detector.detect(sample.text);
        let status = if detected.is_supported() {
            "✓ SUPPORTED"
        } else {
            "✗ NOT SUPPORTED"
        };
        println!(
            "{:<15} - {:<10} (Detected as: {})",
            status,
            sample.label.to_uppercase(),
            detected
        );
    }

    Ok(())
}
