// Connection handling module
// Accepts a single TCP connection and serves it with hyper

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::{TokioIo, TokioTimer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection unless `performance.max_connections` is reached.
///
/// The counter is incremented before the limit check so concurrent accepts
/// cannot both slip under the limit.
pub fn accept_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: &Arc<AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    if state.access_log() {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// Serve one connection on its own task.
///
/// `keep_alive_timeout` bounds how long a connection may sit waiting for the
/// next request head (0 turns keep-alive off, and `read_timeout` bounds the
/// single request head instead). `write_timeout` bounds each response.
fn handle_connection(
    stream: TcpStream,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let perf = &state.config.performance;
        let keep_alive = perf.keep_alive_timeout > 0;
        let header_timeout = Duration::from_secs(if keep_alive {
            perf.keep_alive_timeout
        } else {
            perf.read_timeout
        });
        let write_timeout = Duration::from_secs(perf.write_timeout);

        let service_state = Arc::clone(&state);
        let service = service_fn(move |req| {
            let state = Arc::clone(&service_state);
            async move {
                tokio::time::timeout(write_timeout, handler::handle_request(req, state, peer_addr))
                    .await
                    .map(|res| res.unwrap_or_else(|never| match never {}))
            }
        });

        let conn = http1::Builder::new()
            .timer(TokioTimer::new())
            .keep_alive(keep_alive)
            .header_read_timeout(header_timeout)
            .serve_connection(io, service);

        match conn.await {
            Ok(()) => {}
            // Idle keep-alive connections end through the header timeout
            Err(err) if err.is_timeout() => {}
            Err(err) => logger::log_connection_error(&err),
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}
