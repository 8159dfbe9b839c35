use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use job_finder::{Config, JobFinder, server};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("job_finder=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting job finder");

    let config = Config::from_env()?;
    let finder = JobFinder::from_config(&config)?;

    let source_ids: Vec<&str> = finder
        .sources()
        .iter()
        .map(|source| source.descriptor().id.as_str())
        .collect();
    anyhow::ensure!(!source_ids.is_empty(), "JOB_FINDER_SOURCES matched no known source");
    info!(
        sources = ?source_ids,
        timeout = ?config.fetch_timeout,
        "Sources configured"
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, server::build_router(finder)).await?;

    Ok(())
}
