//! Host startup failures.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// An environment variable could not be parsed.
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),

    /// `[package.metadata.leptos]` or the `LEPTOS_*` overrides are unusable.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// Binding or serving the socket failed.
    #[error("server io: {0}")]
    Io(#[from] std::io::Error),
}
