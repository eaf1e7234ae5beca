//! Hyperlet CRI - Kubernetes Container Runtime Interface over a pod-centric
//! hypervisor daemon.
//!
//! Maps CRI concepts to provider primitives:
//! - Pod Sandbox → provider pod (one hypervisor pod per sandbox)
//! - Container → container inside that pod, started and stopped with it
//!
//! [`RuntimeAdapter`] implements the capability traits in [`lifecycle`];
//! [`CriServer`] exposes them over gRPC.

pub mod adapter;
pub mod bridge;
pub mod config_mapper;
pub mod container;
pub mod convert;
pub mod error;
pub mod filter;
pub mod image;
pub mod image_service;
pub mod lifecycle;
pub mod metadata;
pub mod model;
pub mod reference;
pub mod resources;
pub mod runtime_service;
pub mod sandbox;
pub mod server;
pub mod status;
pub mod time;
pub mod timeout;

pub use adapter::RuntimeAdapter;
pub use server::CriServer;
pub use timeout::TimeoutProvider;

/// Generated CRI protobuf types.
pub mod cri_api {
    tonic::include_proto!("runtime");
}
