// Connection handling module
// Accepts a single TCP connection and serves it on its own task

use std::convert::Infallible;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;

use crate::config::AppState;
use crate::handler;
use crate::logger;

/// Accept a connection, enforcing the optional connection limit.
///
/// Returns `false` if the connection was rejected.
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<AppState>,
) -> bool {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = state.active_connections.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            state.active_connections.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection from {peer_addr} rejected."
            ));
            drop(stream);
            return false;
        }
    }

    logger::log_connection_accepted(&peer_addr);
    handle_connection(stream, peer_addr, Arc::clone(state));
    true
}

/// Serve one connection with hyper's HTTP/1 implementation in a spawned task.
///
/// The whole connection (including keep-alive reuse) is bounded by the
/// larger of the read/write timeouts. The connection counter is decremented
/// when the task ends.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<AppState>,
) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let timeout_duration = state.config.performance.connection_timeout();

        let mut builder = http1::Builder::new();
        builder.keep_alive(state.config.performance.keep_alive_timeout > 0);

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| {
                let response = handler::handle_request(&req, &service_state, peer_addr);
                async move { Ok::<_, Infallible>(response) }
            }),
        );

        match tokio::time::timeout(timeout_duration, conn).await {
            Ok(Ok(())) => {}
            Ok(Err(err)) => logger::log_connection_error(&err),
            Err(_) => {
                logger::log_warning(&format!(
                    "Connection from {peer_addr} timed out after {} seconds",
                    timeout_duration.as_secs()
                ));
            }
        }

        state.active_connections.fetch_sub(1, Ordering::SeqCst);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::server::create_reusable_listener;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn test_state(configure: impl FnOnce(&mut Config)) -> Arc<AppState> {
        let mut cfg = Config::load_from("no-such-config-file-for-tests").unwrap();
        cfg.logging.access_log = false;
        configure(&mut cfg);
        Arc::new(AppState::new(&cfg))
    }

    /// Connect a client to a fresh listener and return both ends
    async fn connected_pair() -> (TcpStream, TcpStream, std::net::SocketAddr) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let client = TcpStream::connect(listener.local_addr().unwrap()).await.unwrap();
        let (server_side, peer_addr) = listener.accept().await.unwrap();
        (client, server_side, peer_addr)
    }

    #[tokio::test]
    async fn test_over_limit_is_rejected_and_counter_rolls_back() {
        let state = test_state(|cfg| cfg.performance.max_connections = Some(0));
        let (mut client, server_side, peer_addr) = connected_pair().await;

        assert!(!accept_connection(server_side, peer_addr, &state));
        assert_eq!(state.active_connections.load(Ordering::SeqCst), 0);

        // The rejected stream was dropped, so the client sees EOF
        let mut buf = Vec::new();
        let read = tokio::time::timeout(Duration::from_secs(5), client.read_to_end(&mut buf)).await;
        assert!(matches!(read, Ok(Ok(0)) | Ok(Err(_))));
    }

    #[tokio::test]
    async fn test_under_limit_is_served() {
        let state = test_state(|cfg| cfg.performance.max_connections = Some(4));
        let (mut client, server_side, peer_addr) = connected_pair().await;

        assert!(accept_connection(server_side, peer_addr, &state));
        assert_eq!(state.active_connections.load(Ordering::SeqCst), 1);

        client
            .write_all(b"GET /debug HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut buf = Vec::new();
        client.read_to_end(&mut buf).await.unwrap();
        assert!(buf.starts_with(b"HTTP/1.1 200 OK\r\n"));
    }

    #[tokio::test]
    async fn test_zero_keep_alive_closes_after_response() {
        let state = test_state(|cfg| cfg.performance.keep_alive_timeout = 0);
        let listener = create_reusable_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        let mut client = TcpStream::connect(addr).await.unwrap();
        let (server_side, peer_addr) = listener.accept().await.unwrap();
        assert!(accept_connection(server_side, peer_addr, &state));

        // No `Connection: close`: the server must close on its own
        client
            .write_all(b"GET /products.json HTTP/1.1\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap();
        let mut buf = Vec::new();
        let read = tokio::time::timeout(Duration::from_secs(5), client.read_to_end(&mut buf)).await;
        assert!(read.is_ok(), "connection stayed open with keep-alive disabled");
        assert!(buf.starts_with(b"HTTP/1.1 200 OK\r\n"));
    }
}
