//! Permissive TLS socket factory
//!
//! Builds the trust-all client configuration and hands out connectors
//! derived from it.

use std::sync::Arc;
use std::time::Duration;

use rustls::ClientConfig;
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;

use crate::errors::TlsFactoryError;
use crate::verifier::AcceptAnyServerCert;

/// Timeout for the TCP connect performed by [`TlsSocketFactory::connect`]
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Factory for TLS client connections that skip certificate validation
///
/// Each call to [`new`](Self::new) builds a fresh configuration: no client
/// credentials, the [`AcceptAnyServerCert`] verifier, and every protocol
/// version the ring provider supports. Instances are independent and cheap
/// to clone; cloning shares the already-built configuration.
#[derive(Clone)]
pub struct TlsSocketFactory {
    config: Arc<ClientConfig>,
}

impl TlsSocketFactory {
    /// Build a new permissive socket factory
    ///
    /// Construction is local and performs no I/O. Safe to call concurrently;
    /// every call allocates its own configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TlsFactoryError::FactoryInit`] if the crypto provider cannot
    /// satisfy the requested protocol versions. The provider's error is
    /// attached as the source.
    pub fn new() -> Result<Self, TlsFactoryError> {
        let provider = Arc::new(rustls::crypto::ring::default_provider());

        let config = ClientConfig::builder_with_provider(provider)
            .with_protocol_versions(rustls::ALL_VERSIONS)
            .map_err(|e| TlsFactoryError::FactoryInit {
                source: Box::new(e),
                context: "requested protocol versions unavailable in crypto provider",
            })?
            .dangerous()
            .with_custom_certificate_verifier(Arc::new(AcceptAnyServerCert))
            .with_no_client_auth();

        tracing::warn!("Built TLS client configuration with certificate validation disabled");

        Ok(Self {
            config: Arc::new(config),
        })
    }

    /// Connector producing TLS-wrapped sockets from this factory's configuration
    #[must_use]
    pub fn connector(&self) -> TlsConnector {
        TlsConnector::from(self.config.clone())
    }

    /// The underlying client configuration, for callers wiring their own connector
    #[must_use]
    pub fn client_config(&self) -> Arc<ClientConfig> {
        self.config.clone()
    }

    /// Open a TCP connection and complete a permissive TLS handshake
    ///
    /// The handshake accepts whatever certificate the server presents,
    /// including self-signed, expired, or hostname-mismatched ones.
    ///
    /// # Errors
    ///
    /// Returns [`TlsFactoryError::Connection`] if the TCP connect fails or
    /// times out, the hostname is not a valid server name, or the TLS
    /// handshake fails.
    pub async fn connect(
        &self,
        host: &str,
        port: u16,
    ) -> Result<tokio_rustls::client::TlsStream<TcpStream>, TlsFactoryError> {
        tracing::debug!("Creating permissive TLS connection to {}:{}", host, port);

        let tcp_stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port)))
            .await
            .map_err(|_| TlsFactoryError::Connection(format!("Connection to {host}:{port} timed out")))?
            .map_err(|e| TlsFactoryError::Connection(format!("Failed to connect to {host}:{port}: {e}")))?;

        let server_name = rustls::pki_types::ServerName::try_from(host.to_string())
            .map_err(|e| TlsFactoryError::Connection(format!("Invalid hostname '{host}': {e}")))?;

        let tls_stream = self
            .connector()
            .connect(server_name, tcp_stream)
            .await
            .map_err(|e| TlsFactoryError::Connection(format!("TLS handshake failed: {e}")))?;

        tracing::info!("Permissive TLS connection established to {}:{}", host, port);
        Ok(tls_stream)
    }
}
