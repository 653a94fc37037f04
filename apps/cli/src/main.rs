mod args;
mod config;
mod dirs;
mod launcher;

use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use http_api::HttpState;
use todo_app::{AppConfig, AppState};

use crate::args::CliArgs;

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args = CliArgs::parse();

    let config = config::load_or_default(dirs::config_dir());
    let port = args.effective_port(&config);

    let paths = dirs::resolve_data_paths(args.data_dir.as_deref())?;
    let public_dir = dirs::resolve_public_dir(
        args.public_dir.as_deref(),
        config.public_dir.as_deref(),
    );
    let app_state = AppState::new(AppConfig::new(paths, public_dir));
    let seeded = app_state
        .initialize()
        .context("failed to prepare data and public directories")?;
    tracing::info!(
        data_dir = %app_state.config.data_dir.display(),
        document = %app_state.config.document_path.display(),
        public_dir = %app_state.config.public_dir.display(),
        seeded,
        "storage ready"
    );

    let ready_tx = if args.should_open_browser(&config) {
        let (ready_tx, ready_rx) = oneshot::channel();
        launcher::open_browser_when_ready(ready_rx, launcher::open_in_default_browser);
        Some(ready_tx)
    } else {
        None
    };

    let router = http_api::router(HttpState::new(app_state));
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let actual_port = listener.local_addr()?.port();
    let url = format!("http://127.0.0.1:{actual_port}/");

    tracing::info!(url = %url, "todo server listening; press Ctrl+C to stop");
    if let Some(ready_tx) = ready_tx {
        // The receiver only goes away if the launch task already ended.
        let _ = ready_tx.send(url);
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("todo server stopped");
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
