//! Lifecycle bridge: per-container verbs on top of pod-only primitives.
//!
//! The provider can start and stop pods but not individual containers.
//!
//! - Sandbox create is two provider calls, create then start. A failed start
//!   leaves the pod in place and surfaces as [`BridgeError::PartialCreate`].
//! - Container start restarts the owning pod (stop, then start). Every other
//!   container in that pod is restarted too.
//! - Container stop and remove succeed without a provider call. The effect
//!   happens when the owning pod is stopped or removed.

use std::sync::Arc;

use hyperlet_core::error::{BridgeError, Result};
use hyperlet_core::provider::{ContainerSpec, HyperProvider, PodSpec};

/// Maps consumer lifecycle verbs onto provider pod primitives.
pub struct LifecycleBridge<P> {
    provider: Arc<P>,
}

impl<P: HyperProvider> LifecycleBridge<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Create a pod and start it. No rollback if the start fails.
    pub async fn create_sandbox(&self, spec: &PodSpec) -> Result<String> {
        let pod_id = self.provider.create_pod(spec).await.inspect_err(|e| {
            tracing::error!(name = %spec.id, error = %e, "Create pod failed");
        })?;

        if let Err(e) = self.provider.start_pod(&pod_id).await {
            tracing::warn!(
                pod_id = %pod_id,
                error = %e,
                "Pod created but start failed; leaving it for the caller to clean up"
            );
            return Err(BridgeError::PartialCreate {
                sandbox_id: pod_id,
                message: e.to_string(),
            });
        }

        Ok(pod_id)
    }

    pub async fn stop_sandbox(&self, pod_id: &str) -> Result<()> {
        let outcome = self.provider.stop_pod(pod_id).await.inspect_err(|e| {
            tracing::error!(pod_id = %pod_id, error = %e, "Stop pod failed");
        })?;
        tracing::debug!(pod_id = %pod_id, code = outcome.code, cause = %outcome.cause, "Pod stopped");
        Ok(())
    }

    /// Remove a pod. The provider force-removes its containers.
    pub async fn delete_sandbox(&self, pod_id: &str) -> Result<()> {
        self.provider.remove_pod(pod_id).await.inspect_err(|e| {
            tracing::error!(pod_id = %pod_id, error = %e, "Remove pod failed");
        })
    }

    pub async fn create_container(&self, pod_id: &str, spec: &ContainerSpec) -> Result<String> {
        self.provider
            .create_container(pod_id, spec)
            .await
            .inspect_err(|e| {
                tracing::error!(
                    pod_id = %pod_id,
                    name = %spec.name,
                    error = %e,
                    "Create container failed"
                );
            })
    }

    /// Start a container by restarting its whole pod.
    pub async fn start_container(&self, container_id: &str) -> Result<()> {
        let info = self
            .provider
            .container_info(container_id)
            .await
            .inspect_err(|e| {
                tracing::error!(container_id = %container_id, error = %e, "Get container info failed");
            })?;

        tracing::info!(
            container_id = %container_id,
            pod_id = %info.pod_id,
            "Restarting pod to start container"
        );

        self.provider.stop_pod(&info.pod_id).await.inspect_err(|e| {
            tracing::error!(pod_id = %info.pod_id, error = %e, "Stop pod failed");
        })?;

        self.provider.start_pod(&info.pod_id).await.inspect_err(|e| {
            tracing::error!(pod_id = %info.pod_id, error = %e, "Start pod failed");
        })
    }

    /// No provider call; the container stops with its pod. Always succeeds.
    pub async fn stop_container(&self, container_id: &str, timeout_secs: i64) -> Result<()> {
        tracing::debug!(
            container_id = %container_id,
            timeout_secs,
            "Container stop deferred to pod stop"
        );
        Ok(())
    }

    /// No provider call; the container goes away with its pod. Always succeeds.
    pub async fn remove_container(&self, container_id: &str) -> Result<()> {
        tracing::debug!(container_id = %container_id, "Container removal deferred to pod removal");
        Ok(())
    }
}
