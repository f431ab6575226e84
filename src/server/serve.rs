// Server loop module
// Accepts connections until shutdown is requested, then drains

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// How long in-flight connections get after the listener closes
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

const DRAIN_POLL: Duration = Duration::from_millis(50);

/// Accept loop. Returns once `shutdown` is notified and in-flight connections
/// finished or the grace period ran out.
pub async fn run_server(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: Arc<Notify>,
) -> std::io::Result<()> {
    let active_connections = Arc::new(AtomicUsize::new(0));

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state, &active_connections);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = shutdown.notified() => break,
        }
    }

    drop(listener);
    logger::log_shutdown(active_connections.load(Ordering::SeqCst));
    drain(&active_connections, SHUTDOWN_GRACE).await;
    Ok(())
}

/// Wait for the counter to reach zero, at most `grace`
async fn drain(active_connections: &AtomicUsize, grace: Duration) {
    let deadline = tokio::time::Instant::now() + grace;
    while active_connections.load(Ordering::SeqCst) > 0 {
        if tokio::time::Instant::now() >= deadline {
            logger::log_warning(&format!(
                "Shutdown grace period elapsed with {} connections open",
                active_connections.load(Ordering::SeqCst)
            ));
            return;
        }
        tokio::time::sleep(DRAIN_POLL).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::resources::ResourceMap;
    use crate::server::listener::create_listener;
    use tempfile::tempdir;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;

    #[tokio::test]
    async fn test_serves_over_tcp_and_shuts_down() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("app.css"), "body{}").unwrap();

        let mut cfg = Config::load_from(dir.path().join("none").to_str().unwrap()).unwrap();
        cfg.logging.access_log = false;
        let mut map = ResourceMap::new();
        map.register_prefix("site", dir.path()).unwrap();
        let state = Arc::new(AppState::with_resources(&cfg, map));

        let listener = create_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let shutdown = Arc::new(Notify::new());
        let server = tokio::spawn(run_server(listener, state, Arc::clone(&shutdown)));

        let mut stream = TcpStream::connect(addr).await.unwrap();
        stream
            .write_all(b"GET /resources/site/app.css HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut raw = String::new();
        stream.read_to_string(&mut raw).await.unwrap();

        assert!(raw.starts_with("HTTP/1.1 200 OK"), "{raw}");
        assert!(raw.to_ascii_lowercase().contains("content-type: text/css"));
        assert!(raw.ends_with("body{}"));

        shutdown.notify_one();
        server.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_drain_returns_when_idle() {
        let counter = AtomicUsize::new(0);
        drain(&counter, Duration::from_secs(1)).await;

        let busy = AtomicUsize::new(1);
        let started = std::time::Instant::now();
        drain(&busy, Duration::from_millis(100)).await;
        assert!(started.elapsed() >= Duration::from_millis(100));
    }
}
