// Signal handling module
//
// SIGTERM and SIGINT (Ctrl+C) request a graceful shutdown.

use std::sync::Arc;
use tokio::sync::Notify;

/// Spawn a task that notifies `shutdown` on the first termination signal.
///
/// Fails if the signal handlers cannot be installed.
#[cfg(unix)]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        crate::logger::log_warning(&format!("{name} received, shutting down"));
        shutdown.notify_one();
    });

    Ok(())
}

/// Non-Unix fallback: only Ctrl+C
#[cfg(not(unix))]
pub fn start_signal_handler(shutdown: Arc<Notify>) -> std::io::Result<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            crate::logger::log_warning("Ctrl+C received, shutting down");
            shutdown.notify_one();
        }
    });
    Ok(())
}
