use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::api::router::build_router;
use crate::api::shutdown::ShutdownSignal;
use crate::inventory::InventoryService;

/// Errors from the server lifecycle.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid bind address '{addr}': {source}")]
    InvalidBindAddr {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("bind() must be called before run()")]
    NotBound,

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// HTTP server for the inventory API.
///
/// Binds the listener up front so the actual address (port 0 supported)
/// is known before the serve loop starts, then runs with graceful
/// shutdown on ctrl-c/SIGTERM or a [`ServerHandle`] signal.
pub struct ApiServer {
    service: InventoryService,
    /// The bound listener, kept alive between bind() and run() so the
    /// port cannot be claimed by another process in between.
    listener: Option<TcpListener>,
    addr: Option<SocketAddr>,
    shutdown: Arc<ShutdownSignal>,
}

impl ApiServer {
    pub fn new(service: InventoryService) -> Self {
        Self {
            service,
            listener: None,
            addr: None,
            shutdown: Arc::new(ShutdownSignal::new()),
        }
    }

    /// Bind to `bind_addr` and return the actual bound address.
    pub async fn bind(&mut self, bind_addr: &str) -> Result<SocketAddr, ServerError> {
        let addr: SocketAddr = bind_addr.parse().map_err(|e| ServerError::InvalidBindAddr {
            addr: bind_addr.to_string(),
            source: e,
        })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::Bind { addr, source: e })?;
        let actual_addr = listener.local_addr()?;

        self.listener = Some(listener);
        self.addr = Some(actual_addr);
        tracing::info!(addr = %actual_addr, "inventory API bound");
        Ok(actual_addr)
    }

    /// The bound address, if bind() has run.
    pub fn addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    pub fn handle(&self) -> ServerHandle {
        ServerHandle {
            shutdown: self.shutdown.clone(),
        }
    }

    /// Run the server until shutdown.
    ///
    /// Consumes self to take ownership of the pre-bound listener.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = self.listener.ok_or(ServerError::NotBound)?;

        let app = build_router(self.service);
        let shutdown = self.shutdown.clone();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                shutdown.wait_for_shutdown().await;
            })
            .await?;

        tracing::info!("inventory API stopped");
        Ok(())
    }
}

/// Cheap cloneable handle for signalling shutdown from another task.
#[derive(Clone)]
pub struct ServerHandle {
    shutdown: Arc<ShutdownSignal>,
}

impl ServerHandle {
    pub fn shutdown(&self) {
        self.shutdown.signal_shutdown();
    }
}
