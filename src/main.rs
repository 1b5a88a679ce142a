use anyhow::Result;
use clap::Parser;
use featcmp::cli::Cli;
use featcmp::engine::{Engine, Renderer};
use featcmp::server;
use featcmp::services::{ChromiumRenderer, NoopRenderer, ReqwestFetcher};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let renderer: Box<dyn Renderer> = if cli.no_browser {
        Box::new(NoopRenderer)
    } else {
        match ChromiumRenderer::launch().await {
            Ok(r) => Box::new(r),
            Err(e) => {
                tracing::warn!(%e, "browser unavailable, marketplace URLs will fail");
                Box::new(NoopRenderer)
            }
        }
    };

    let engine = Engine::new(
        Box::new(ReqwestFetcher::new()?),
        renderer,
        cli.fetch_config(),
    );

    server::start(cli.port, Arc::new(engine)).await
}
