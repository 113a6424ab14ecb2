//! Error types for factory construction and connection setup

/// Errors produced by the permissive TLS factory
#[derive(Debug, thiserror::Error)]
pub enum TlsFactoryError {
    /// TLS client configuration could not be built. The only failure mode of
    /// factory construction; the crypto provider's original error is attached
    /// as the source.
    #[error("Failed to create TLS socket factory: {context}")]
    FactoryInit {
        source: Box<dyn std::error::Error + Send + Sync>,
        context: &'static str,
    },
    /// TCP connect, timeout, or TLS handshake failure in [`connect`].
    ///
    /// [`connect`]: crate::TlsSocketFactory::connect
    #[error("Connection failed: {0}")]
    Connection(String),
}
