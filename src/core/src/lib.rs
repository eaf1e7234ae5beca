//! Hyperlet Core - shared types for the CRI bridge
//!
//! Holds the error type, the bridge configuration and the contract of the
//! pod-centric provider daemon that the bridge drives.

pub mod config;
pub mod error;
pub mod provider;

// Re-export commonly used types
pub use config::{BridgeConfig, ResourceDefaults};
pub use error::{BridgeError, Result};
pub use provider::HyperProvider;

/// Hyperlet version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
