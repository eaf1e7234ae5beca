use thiserror::Error;

/// Hyperlet error types
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Request rejected before any provider call
    #[error("Validation error: {0}")]
    Validation(String),

    /// Failure reported by the provider daemon, message kept verbatim
    #[error("{0}")]
    Provider(String),

    /// Provider call exceeded the configured bound
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Operation the bridge does not offer
    #[error("Not implemented: {0}")]
    NotImplemented(String),

    /// Sandbox exists in the provider but could not be started.
    ///
    /// The sandbox is left in place; the caller must stop and delete it.
    #[error("Sandbox {sandbox_id} created but not started: {message}")]
    PartialCreate { sandbox_id: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// gRPC communication error
    #[error("gRPC error: {0}")]
    Grpc(#[from] tonic::Status),
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for BridgeError {
    fn from(err: serde_yaml::Error) -> Self {
        BridgeError::Serialization(err.to_string())
    }
}

/// Result type alias for hyperlet operations
pub type Result<T> = std::result::Result<T, BridgeError>;
