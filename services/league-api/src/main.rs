//! League media API service.
//!
//! HTTP server for head-to-head event previews, event sharing metadata and
//! the admin event tools.

use anyhow::Result;
use clap::Parser;
use std::{net::SocketAddr, sync::Arc};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use league_api::{router, AppState, Args};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Build tokio runtime with configurable worker threads
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(threads) = args.worker_threads {
        runtime_builder.worker_threads(threads);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(args))?;
    Ok(())
}

async fn async_main(args: Args) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(args.level())
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(threads) = args.worker_threads {
        info!("Configured tokio runtime with {} worker threads", threads);
    }

    // Initialize Prometheus metrics exporter
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()?;

    info!("Prometheus metrics exporter initialized");
    info!("Starting league media API server");

    let state = Arc::new(AppState::from_args(&args).await?.with_prometheus(prometheus_handle));

    let app = router(state);

    let addr: SocketAddr = args.listen.parse()?;
    info!(address = %addr, "Listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
