use std::time::Duration;

use herald_common::config::AppConfig;
use herald_notifier::{Notifier, TelegramSender};
use herald_poller::clock::SystemClock;
use herald_poller::fetcher::{ReqwestTransport, ReviewApi};
use herald_poller::poller::StatusPoller;

const DEFAULT_LOG_FILTER: &str = "herald_poller=info,herald_notifier=info,herald_common=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .json()
        .init();

    tracing::info!("ReviewHerald poller starting...");

    // Missing configuration is fatal and never retried
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                severity = "critical",
                error = %e,
                "Cannot start without configuration"
            );
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let api = ReviewApi::new(
        ReqwestTransport::new(),
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
    );
    let notifier = Notifier::new(
        TelegramSender::new(config.telegram_api_url.clone(), config.telegram_token.clone()),
        config.telegram_chat_id.clone(),
    );
    let mut poller = StatusPoller::new(
        api,
        notifier,
        SystemClock,
        Duration::from_secs(config.retry_period_secs),
    );

    // Run until Ctrl+C
    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping...");
        }
    }

    tracing::info!("ReviewHerald poller stopped.");
    Ok(())
}
