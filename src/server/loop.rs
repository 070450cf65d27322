// Server loop module
// Accepts connections until the process is interrupted

use std::sync::Arc;
use tokio::net::TcpListener;

use super::connection::accept_connection;
use crate::config::AppState;
use crate::logger;

/// Accept loop for the fixture server.
///
/// Accept errors are logged and the loop keeps going; Ctrl+C ends it.
pub async fn start_server_loop(
    listener: TcpListener,
    state: Arc<AppState>,
) -> std::io::Result<()> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            signal = tokio::signal::ctrl_c() => {
                signal?;
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
