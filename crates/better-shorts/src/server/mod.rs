//! Local HTTP transport for the boundary operations.
//!
//! Runs on its own thread with a dedicated tokio runtime so the main thread
//! stays free for the platform event loop.

mod routes;

pub(crate) use routes::{AppState, router};

use crate::{AppError, AppResult};

use std::{
    net::{Ipv4Addr, SocketAddr},
    panic::Location,
    sync::mpsc,
    thread::JoinHandle,
    time::Duration,
};

use error_location::ErrorLocation;
use tokio::{net::TcpListener, sync::watch};
use tracing::{error, info, instrument, warn};

/// Running server thread and its shutdown signal.
pub struct ServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: watch::Sender<bool>,
    thread: Option<JoinHandle<()>>,
}

impl ServerHandle {
    /// Start serving `state` on `127.0.0.1:port`.
    ///
    /// Returns once the listener is bound, or with an error if the port
    /// cannot be taken. Port `0` picks a free port.
    #[track_caller]
    #[instrument(skip(state))]
    pub fn spawn(state: AppState, port: u16) -> AppResult<Self> {
        let runtime = tokio::runtime::Runtime::new().map_err(|e| AppError::ServerError {
            reason: format!("Failed to create tokio runtime: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let (ready_tx, ready_rx) = mpsc::channel::<Result<SocketAddr, String>>();

        let thread = std::thread::Builder::new()
            .name("better-shorts-http".to_string())
            .spawn(move || {
                runtime.block_on(async move {
                    let bound = TcpListener::bind((Ipv4Addr::LOCALHOST, port))
                        .await
                        .and_then(|listener| Ok((listener.local_addr()?, listener)));

                    let listener = match bound {
                        Ok((addr, listener)) => {
                            info!(%addr, "Settings API listening");
                            let _ = ready_tx.send(Ok(addr));
                            listener
                        }
                        Err(e) => {
                            error!(port, error = ?e, "Failed to bind settings API");
                            let _ = ready_tx.send(Err(e.to_string()));
                            return;
                        }
                    };

                    let shutdown = async move {
                        let _ = shutdown_rx.changed().await;
                        info!("Settings API shutting down");
                    };

                    if let Err(e) = axum::serve(listener, router(state))
                        .with_graceful_shutdown(shutdown)
                        .await
                    {
                        error!(error = ?e, "Settings API stopped with error");
                    }
                });

                // In-flight blocking work gets a moment to finish.
                runtime.shutdown_timeout(Duration::from_secs(1));
            })?;

        let ready = ready_rx
            .recv()
            .unwrap_or_else(|_| Err("server thread exited before binding".to_string()));

        match ready {
            Ok(local_addr) => Ok(Self {
                local_addr,
                shutdown_tx,
                thread: Some(thread),
            }),
            Err(reason) => {
                let _ = thread.join();
                Err(AppError::ServerError {
                    reason: format!("Failed to bind 127.0.0.1:{}: {}", port, reason),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
        }
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal shutdown and wait for the server thread.
    #[instrument(skip(self))]
    pub fn shutdown(&mut self) {
        let _ = self.shutdown_tx.send(true);

        if let Some(thread) = self.thread.take() {
            match thread.join() {
                Ok(()) => info!("Settings API stopped cleanly"),
                Err(_) => warn!("Settings API thread panicked"),
            }
        }
    }
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        self.shutdown();
    }
}
