use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;
use wishboard::config::{Cli, Config, default_config_dir, default_config_path};
use wishboard::db::Database;
use wishboard::handler::AppState;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // The database lives next to the config file: the parent of --config if
    // given, ~/.wishboard/ otherwise.
    let (config_path, data_dir) = match args.config_path {
        Some(path) => {
            let path = PathBuf::from(path);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| PathBuf::from("."));
            (path, dir)
        }
        None => (default_config_path(), default_config_dir()),
    };

    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        eprintln!("failed to create data directory {:?}: {}", data_dir, e);
        std::process::exit(1);
    }

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    tracing::info!("wishboard.svc starting");

    let mut cfg = Config::new(&config_path).unwrap_or_else(|e| {
        tracing::error!(error = %e, path = ?config_path, "failed to load config file");
        std::process::exit(1);
    });
    if let Some(port) = args.port {
        cfg.app.set_port(port);
    }

    let db = Arc::new(Database::new(&cfg, &data_dir).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup database");
        std::process::exit(1);
    }));

    let address = format!("0.0.0.0:{}", cfg.app.get_port());
    let cancellation_token = CancellationToken::new();

    let app = wishboard::app(AppState {
        db: db.clone(),
        board: cfg.board,
    });

    let listener = tokio::net::TcpListener::bind(&address).await.unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to setup tcp listener");
        std::process::exit(1);
    });

    let shutdown_token = cancellation_token.clone();
    tokio::spawn(async move {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl+c");
            return;
        }
        tracing::info!("ctrl+c signal received, preparing to shutdown");
        shutdown_token.cancel();
    });

    tracing::info!("wishboard.svc running on {}", &address);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(cancellation_token.cancelled_owned())
        .await;
    if let Err(err) = served {
        tracing::error!(error = %err, "server exited with error");
        std::process::exit(1);
    }

    match Arc::into_inner(db) {
        Some(db) => db.close(),
        None => tracing::warn!("database still referenced at shutdown, leaving it to drop"),
    }
    tracing::info!("wishboard.svc going off, graceful shutdown complete");
}
