//! Error types for node resolution.
//!
//! A reference that cannot be resolved is a mistake in test setup, never a
//! condition the code under test should observe. The builder surfaces it as a
//! panic; `try_resolve` exposes the typed error for tests that assert on it.

#[doc(hidden)]
pub type Result<T> = std::result::Result<T, ResolveError>;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// Reference names a node the cluster configuration does not know.
    #[error("failed to find '{0}' in cluster configuration")]
    UnknownNode(String),

    /// Identifier or name reference without a cluster configuration to consult.
    #[error("cannot resolve '{0}': no cluster configuration supplied")]
    NoClusterConfig(String),
}
