//! Pod sandbox operations.
//!
//! Maps CRI PodSandbox to a provider pod (one hypervisor pod per sandbox).

use async_trait::async_trait;

use hyperlet_core::error::Result;
use hyperlet_core::provider::HyperProvider;

use crate::adapter::RuntimeAdapter;
use crate::config_mapper::pod_sandbox_config_to_pod_spec;
use crate::filter;
use crate::lifecycle::SandboxLifecycle;
use crate::model::{PodSandbox, PodSandboxConfig, PodSandboxFilter, PodSandboxStatus};
use crate::status::sandbox_state;

#[async_trait]
impl<P: HyperProvider> SandboxLifecycle for RuntimeAdapter<P> {
    async fn create_pod_sandbox(&self, config: &PodSandboxConfig) -> Result<String> {
        tracing::info!(name = %config.name, "CRI CreatePodSandbox");

        let spec = pod_sandbox_config_to_pod_spec(config, &self.config.resources);
        self.bridge.create_sandbox(&spec).await
    }

    async fn stop_pod_sandbox(&self, sandbox_id: &str) -> Result<()> {
        tracing::info!(sandbox_id = %sandbox_id, "CRI StopPodSandbox");
        self.bridge.stop_sandbox(sandbox_id).await
    }

    async fn delete_pod_sandbox(&self, sandbox_id: &str) -> Result<()> {
        tracing::info!(sandbox_id = %sandbox_id, "CRI DeletePodSandbox");
        self.bridge.delete_sandbox(sandbox_id).await
    }

    async fn pod_sandbox_status(&self, sandbox_id: &str) -> Result<PodSandboxStatus> {
        tracing::debug!(sandbox_id = %sandbox_id, "CRI PodSandboxStatus");

        let info = self.provider.pod_info(sandbox_id).await.inspect_err(|e| {
            tracing::error!(sandbox_id = %sandbox_id, error = %e, "Get pod info failed");
        })?;

        Ok(PodSandboxStatus {
            id: sandbox_id.to_string(),
            name: info.pod_name,
            state: sandbox_state(&info.phase),
            created_at: info.created_at,
            ip: info.pod_ips.into_iter().next().unwrap_or_default(),
            labels: info.labels,
        })
    }

    async fn list_pod_sandbox(&self, filter: Option<&PodSandboxFilter>) -> Result<Vec<PodSandbox>> {
        tracing::debug!(?filter, "CRI ListPodSandbox");

        let pods = self.provider.list_pods().await.inspect_err(|e| {
            tracing::error!(error = %e, "Get pod list failed");
        })?;

        let sandboxes = pods.into_iter().map(|pod| PodSandbox {
            state: sandbox_state(&pod.status),
            id: pod.pod_id,
            name: pod.pod_name,
            created_at: pod.created_at,
            labels: pod.labels,
        });

        Ok(filter::apply(filter, sandboxes))
    }
}
