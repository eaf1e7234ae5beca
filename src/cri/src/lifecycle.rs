//! Capability traits of the runtime surface.
//!
//! [`RuntimeAdapter`](crate::adapter::RuntimeAdapter) implements all of them
//! once; the gRPC services only delegate.

use async_trait::async_trait;

use hyperlet_core::error::Result;

use crate::model::{
    AuthConfig, Container, ContainerConfig, ContainerFilter, ContainerStatus, Image, ImageFilter,
    PodSandbox, PodSandboxConfig, PodSandboxFilter, PodSandboxStatus, VersionInfo,
};

/// Pod sandbox lifecycle and queries.
#[async_trait]
pub trait SandboxLifecycle: Send + Sync {
    /// Create and start a sandbox, returning its id.
    async fn create_pod_sandbox(&self, config: &PodSandboxConfig) -> Result<String>;

    /// Stop a sandbox; running containers in it stop with it.
    async fn stop_pod_sandbox(&self, sandbox_id: &str) -> Result<()>;

    /// Delete a sandbox; its containers are removed with it.
    async fn delete_pod_sandbox(&self, sandbox_id: &str) -> Result<()>;

    async fn pod_sandbox_status(&self, sandbox_id: &str) -> Result<PodSandboxStatus>;

    async fn list_pod_sandbox(&self, filter: Option<&PodSandboxFilter>) -> Result<Vec<PodSandbox>>;
}

/// Container lifecycle and queries.
#[async_trait]
pub trait ContainerLifecycle: Send + Sync {
    async fn create_container(&self, sandbox_id: &str, config: &ContainerConfig) -> Result<String>;

    /// Start a container. This restarts every container of the owning sandbox.
    async fn start_container(&self, container_id: &str) -> Result<()>;

    async fn stop_container(&self, container_id: &str, timeout_secs: i64) -> Result<()>;

    async fn remove_container(&self, container_id: &str) -> Result<()>;

    async fn list_containers(&self, filter: Option<&ContainerFilter>) -> Result<Vec<Container>>;

    async fn container_status(&self, container_id: &str) -> Result<ContainerStatus>;

    /// Run a command in a container. Not offered by this runtime.
    async fn exec(&self, container_id: &str, cmd: &[String], tty: bool) -> Result<Vec<u8>>;
}

/// Image queries and transfers.
#[async_trait]
pub trait ImageLifecycle: Send + Sync {
    async fn list_images(&self, filter: Option<&ImageFilter>) -> Result<Vec<Image>>;

    /// Not offered by this runtime.
    async fn image_status(&self, image: &str) -> Result<Image>;

    async fn pull_image(&self, image: &str, auth: Option<&AuthConfig>) -> Result<()>;

    async fn remove_image(&self, image: &str) -> Result<()>;
}

/// Runtime identification.
#[async_trait]
pub trait RuntimeVersion: Send + Sync {
    async fn version(&self) -> Result<VersionInfo>;
}
