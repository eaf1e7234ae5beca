//! Per-call deadline for provider requests.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use hyperlet_core::error::{BridgeError, Result};
use hyperlet_core::provider::{
    ContainerInfo, ContainerSpec, ContainerSummary, DaemonVersion, HyperProvider, ImageInfo,
    PodInfo, PodSpec, PodSummary, RegistryAuth, StopOutcome,
};

/// Wraps a provider so every call fails with [`BridgeError::Timeout`]
/// instead of hanging past `timeout`. Calls are never retried.
pub struct TimeoutProvider<P> {
    inner: P,
    timeout: Duration,
}

impl<P: HyperProvider> TimeoutProvider<P> {
    pub fn new(inner: P, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &P {
        &self.inner
    }

    async fn bounded<T>(&self, operation: &str, call: impl Future<Output = Result<T>>) -> Result<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(operation, timeout = ?self.timeout, "Provider call timed out");
                Err(BridgeError::Timeout(format!(
                    "{} exceeded {:?}",
                    operation, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl<P: HyperProvider> HyperProvider for TimeoutProvider<P> {
    async fn create_pod(&self, spec: &PodSpec) -> Result<String> {
        self.bounded("PodCreate", self.inner.create_pod(spec)).await
    }

    async fn start_pod(&self, pod_id: &str) -> Result<()> {
        self.bounded("PodStart", self.inner.start_pod(pod_id)).await
    }

    async fn stop_pod(&self, pod_id: &str) -> Result<StopOutcome> {
        self.bounded("PodStop", self.inner.stop_pod(pod_id)).await
    }

    async fn remove_pod(&self, pod_id: &str) -> Result<()> {
        self.bounded("PodRemove", self.inner.remove_pod(pod_id)).await
    }

    async fn pod_info(&self, pod_id: &str) -> Result<PodInfo> {
        self.bounded("PodInfo", self.inner.pod_info(pod_id)).await
    }

    async fn list_pods(&self) -> Result<Vec<PodSummary>> {
        self.bounded("PodList", self.inner.list_pods()).await
    }

    async fn create_container(&self, pod_id: &str, spec: &ContainerSpec) -> Result<String> {
        self.bounded("ContainerCreate", self.inner.create_container(pod_id, spec))
            .await
    }

    async fn container_info(&self, container_id: &str) -> Result<ContainerInfo> {
        self.bounded("ContainerInfo", self.inner.container_info(container_id))
            .await
    }

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
        self.bounded("ContainerList", self.inner.list_containers()).await
    }

    async fn list_images(&self) -> Result<Vec<ImageInfo>> {
        self.bounded("ImageList", self.inner.list_images()).await
    }

    async fn pull_image(&self, repo: &str, tag: &str, auth: &RegistryAuth) -> Result<()> {
        self.bounded("ImagePull", self.inner.pull_image(repo, tag, auth))
            .await
    }

    async fn remove_image(&self, image: &str) -> Result<()> {
        self.bounded("ImageRemove", self.inner.remove_image(image)).await
    }

    async fn version(&self) -> Result<DaemonVersion> {
        self.bounded("Version", self.inner.version()).await
    }
}
