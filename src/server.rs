use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::build_router, config::AppConfig, repository::InMemoryCommentRepository, seed,
    state::AppState,
};

/// Seeds the store and assembles the router for `config`.
pub fn bootstrap(config: &AppConfig) -> Result<Router> {
    let comments = seed::initial_comments(config.seed_file.as_deref())
        .context("failed to seed comment store")?;
    info!(
        count = comments.len(),
        policy = ?config.not_found_policy,
        "comment store ready"
    );

    let repo = Arc::new(InMemoryCommentRepository::with_comments(comments));
    let state = AppState::new(repo).with_not_found_policy(config.not_found_policy);
    Ok(build_router(state))
}

pub async fn run(config: AppConfig) -> Result<()> {
    let app = bootstrap(&config)?;

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {addr}"))?;

    info!(address = %addr, "comment store started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("comment store stopped");
    Ok(())
}

/// Used when `RUST_LOG` is unset or unparseable.
pub const DEFAULT_LOG_FILTER: &str = "comment_store=debug,tower_http=info";

pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on Ctrl+C or SIGTERM, logging which one arrived.
///
/// A handler that fails to install never fires, so the other signal still
/// stops the server.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => "ctrl_c",
            Err(err) => {
                error!(error = %err, "unable to install Ctrl+C handler");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "sigterm"
            }
            Err(err) => {
                error!(error = %err, "unable to install SIGTERM handler");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = ctrl_c => name,
        name = terminate => name,
    };
    info!(signal = received, "draining comment store connections");
}
