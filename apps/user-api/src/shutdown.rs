use std::time::Duration;
use tokio::signal;

/// Resolves on Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed the corresponding branch never fires
/// and the other one still drives shutdown.
pub async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, initiating graceful shutdown");
        }
    }

    tracing::info!(
        timeout_secs = timeout.as_secs(),
        "allowing connections to drain"
    );
}

/// Force the process down if open connections have not drained within
/// `timeout` of the shutdown signal.
pub fn spawn_drain_deadline(timeout: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(timeout).await;
        tracing::warn!(
            timeout_secs = timeout.as_secs(),
            "drain window elapsed with connections still open, exiting"
        );
        std::process::exit(0);
    });
}
