//! CRI-specific error conversions.

use hyperlet_core::error::BridgeError;
use tonic::Status;

/// Convert a BridgeError to a gRPC Status.
pub fn bridge_error_to_status(err: BridgeError) -> Status {
    match err {
        BridgeError::Validation(msg) => Status::invalid_argument(msg),
        BridgeError::Config(msg) => Status::invalid_argument(msg),
        BridgeError::Provider(msg) => Status::unknown(msg),
        BridgeError::Timeout(msg) => Status::deadline_exceeded(msg),
        BridgeError::NotImplemented(msg) => Status::unimplemented(msg),
        err @ BridgeError::PartialCreate { .. } => Status::internal(err.to_string()),
        BridgeError::Grpc(status) => status,
        other => Status::internal(other.to_string()),
    }
}
