use std::sync::Arc;

use anyhow::Context;
use infrastructure::{Database, SqliteTodoRepository};
use shared::{init_tracing, Config};
use todo_api::{app, AppState, TodoService};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.logging)?;

    let db = Database::connect(&config.database).await?;
    let repository = Arc::new(SqliteTodoRepository::new(db.pool().clone()));
    let state = AppState::new(TodoService::new(repository), &config.server)
        .context("CORS_ALLOW_ORIGIN is not a valid header value")?;

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address))?;

    info!(
        environment = %config.environment,
        address = %config.server.bind_address,
        "Listening"
    );

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
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
}
