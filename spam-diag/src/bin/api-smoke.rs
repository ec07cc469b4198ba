//! API smoke test
//!
//! Logs in to the spam-detection API and submits sample messages in several
//! languages to the prediction endpoint, printing each response.
//!
//! # Usage
//!
//! ```bash
//! api-smoke
//! api-smoke http://localhost:5000
//! SPAM_API_EMAIL=ops@example.com SPAM_API_PASSWORD=... api-smoke
//! ```

use clap::Parser;
use spam_diag::api::{ApiClient, Credentials, PredictionOutcome, PredictionReport};
use spam_diag::samples::API_SAMPLES;
use spam_diag::{detect_language, logging, DiagConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "api-smoke")]
#[command(about = "Smoke-test the login and prediction endpoints", long_about = None)]
struct Cli {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// API base URL, overrides the config (e.g., http://localhost:5000)
    base_url: Option<String>,
}

fn print_report(report: &PredictionReport) {
    println!("\nTesting {}:", report.label.to_uppercase());
    println!("Message: {}", report.message);
    match report.status {
        Some(status) => println!("Status Code: {}", status),
        None => println!("Status Code: N/A"),
    }

    match &report.outcome {
        PredictionOutcome::Failure { error, language } => {
            println!("❌ Error: {}", error);
            if let Some(language) = language {
                println!("   Detected Language: {}", language);
            }
            if report.outcome.is_unsupported_language() {
                let local = detect_language(&report.message);
                let agrees = report.outcome.detected_language() == Some(local);
                println!(
                    "   Local detector: {} ({})",
                    local,
                    if agrees { "agrees" } else { "differs" }
                );
            }
        }
        PredictionOutcome::Success {
            is_spam,
            language,
            confidence,
            ..
        } => {
            let or_na = |v: Option<String>| v.unwrap_or_else(|| "N/A".to_string());
            println!("✓ Spam Detection: {}", or_na(is_spam.map(|v| v.to_string())));
            println!("  Language: {}", or_na(language.clone()));
            println!("  Confidence: {}", or_na(confidence.map(|v| v.to_string())));
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = DiagConfig::load(cli.config.as_deref())?;
    if let Some(url) = cli.base_url {
        config.api.base_url = url;
    }
    logging::init(&config.logging.level)?;

    let client = ApiClient::new(config.api.base_url.clone());
    let credentials = Credentials::new(config.api.email.clone(), config.api.password.clone());

    println!("1. Testing Login...");
    let login = match client.login(&credentials).await {
        Ok(login) => login,
        Err(e) => {
            println!("Error: {}", e);
            println!("Login failed!");
            return Ok(());
        }
    };
    println!("Status: {}", login.status);
    println!("Response: {}", login.body);

    let token = match login.token() {
        Ok(token) => token,
        Err(e) => {
            tracing::debug!("No token: {}", e);
            println!("Login failed!");
            return Ok(());
        }
    };
    println!("\nToken obtained: {}", token);

    println!("\n{}", "=".repeat(60));
    println!("2. Testing Detection with Different Languages...");
    println!("{}", "=".repeat(60));

    let reports = client
        .predict_samples(&token, &API_SAMPLES, config.api.message_type)
        .await;
    for report in &reports {
        print_report(report);
    }

    Ok(())
}
