use chrono::Local;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uniopen_watch::checker::PromoChecker;
use uniopen_watch::config::load_config;
use uniopen_watch::model::{CheckError, RunOutcome};
use uniopen_watch::scraper::HttpFetcher;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the STATUS_CHANGED line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let result = run().await;
    match &result {
        Ok(outcome) => println!("{}", report(outcome)),
        Err(e) => error!("Run failed: {}", e),
    }
    ExitCode::from(exit_status(&result))
}

async fn run() -> Result<RunOutcome, CheckError> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = load_config(&config_path)?;

    let fetcher = HttpFetcher::from_config(&config)?;
    let checker = PromoChecker::new(&config, Arc::new(fetcher));

    // Local date, not UTC: the scheduler runs in UTC so the two agree there.
    let outcome = checker.run(Local::now().date_naive()).await?;
    if let RunOutcome::FetchFailed { reason } = &outcome {
        info!("Status left unchanged ({})", reason);
    }
    Ok(outcome)
}

/// The line downstream automation greps for.
fn report(outcome: &RunOutcome) -> String {
    format!("STATUS_CHANGED={}", outcome.changed())
}

/// Handled fetch failures still exit 0; only fatal errors fail the process.
fn exit_status(result: &Result<RunOutcome, CheckError>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
