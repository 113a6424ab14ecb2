//! Permissive TLS client socket factory
//!
//! Builds a rustls client configuration that accepts any server certificate
//! and hands out [`tokio_rustls::TlsConnector`] instances derived from it.
//! Intended for scraping targets that serve self-signed, expired, or
//! mismatched certificates.
//!
//! # Security
//!
//! The configuration produced here performs **no certificate validation at
//! all**. In rustls the server-name check lives inside the certificate
//! verifier, so hostname verification is disabled along with chain
//! validation. Connections made through this factory are encrypted but not
//! authenticated: any party able to intercept traffic can impersonate the
//! server. Never use this for traffic that carries credentials or other
//! sensitive data.
//!
//! # Example
//!
//! ```no_run
//! use permissive_tls::TlsSocketFactory;
//!
//! # async fn run() -> Result<(), permissive_tls::TlsFactoryError> {
//! let factory = TlsSocketFactory::new()?;
//! let stream = factory.connect("self-signed.example.com", 443).await?;
//! # let _ = stream;
//! # Ok(())
//! # }
//! ```

mod errors;
mod factory;
mod verifier;

pub use errors::TlsFactoryError;
pub use factory::TlsSocketFactory;
pub use verifier::{AcceptAnyClientCert, AcceptAnyServerCert};
