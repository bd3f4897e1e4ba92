//! Quran Lexicon Service — Binary Entrypoint
//! Boots the Axum HTTP server, wiring routes, shared state, and middleware.

use std::sync::Arc;

use anyhow::Context as _;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use quran_lexicon::api::{create_router, AppState};
use quran_lexicon::config::LexiconConfig;
use quran_lexicon::lexicon::http::HttpPartitionSource;
use quran_lexicon::lexicon::Lexicon;
use quran_lexicon::metrics::Metrics;

/// Compact tracing with env-filter; defaults keep the lexicon target audible.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lexicon=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    init_tracing();

    // Recorder first so the store's series register against it.
    let metrics = Metrics::init();

    let cfg = LexiconConfig::from_env().context("resolving lexicon config")?;
    let source = Arc::new(HttpPartitionSource::new(cfg.base_url.clone()));
    let lexicon = Arc::new(Lexicon::new(source, cfg.partitions.clone()));

    // Pre-warm the cache in the background, mirroring the original page-load
    // preload. A failure here is not fatal: the first search retries.
    {
        let lexicon = Arc::clone(&lexicon);
        tokio::spawn(async move {
            if let Err(e) = lexicon.load().await {
                tracing::warn!(target: "lexicon", error = %e, "pre-warm load failed");
            }
        });
    }

    let state = AppState {
        lexicon: Arc::clone(&lexicon),
    };
    let router = create_router(state).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    tracing::info!(target: "lexicon", bind = %cfg.bind, partitions = lexicon.partition_count(), "serving");
    axum::serve(listener, router).await.context("serving")?;

    Ok(())
}
