use std::sync::Arc;

use pack_calculator::api::{self, AppState};
use pack_calculator::config::Config;
use pack_calculator::service::{PackCalculator, validate_pack_sizes};
use pack_calculator::store::MemoryPackSizeStore;
use tracing::Level;

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_ansi(false)
        .with_max_level(Level::INFO)
        .init();

    let config = Config::from_env();

    let _sentry = sentry::init(sentry::ClientOptions {
        dsn: config.sentry_dsn.as_deref().and_then(|dsn| dsn.parse().ok()),
        release: sentry::release_name!(),
        ..Default::default()
    });

    let raw: Vec<i64> = config.pack_sizes.iter().map(|&s| s as i64).collect();
    let pack_sizes = validate_pack_sizes(&raw).unwrap_or_else(|e| {
        tracing::error!(error = %e, "invalid PACK_SIZES");
        std::process::exit(1);
    });

    let store = Arc::new(MemoryPackSizeStore::new(&pack_sizes));
    let app = api::build_router(AppState::new(PackCalculator::new(store)));

    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    tracing::info!(%addr, ?pack_sizes, "server starting");

    if let Err(e) = api::serve(listener, app, shutdown_signal(), api::SHUTDOWN_TIMEOUT).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }

    tracing::info!("server stopped");
}
