//! Container operations.
//!
//! Containers live inside a provider pod. Start, stop and remove go through
//! the [`LifecycleBridge`](crate::bridge::LifecycleBridge); queries enrich
//! the provider listing with a per-container info lookup.

use async_trait::async_trait;

use hyperlet_core::error::{BridgeError, Result};
use hyperlet_core::provider::{ContainerInfo, HyperProvider, PodVolume};

use crate::adapter::RuntimeAdapter;
use crate::config_mapper::container_config_to_container_spec;
use crate::lifecycle::ContainerLifecycle;
use crate::model::{
    Container, ContainerConfig, ContainerFilter, ContainerState, ContainerStatus, Mount,
};
use crate::status::container_state;
use crate::time::parse_timestamp;

/// Provider container names carry a leading `/`.
fn display_name(name: &str) -> String {
    name.strip_prefix('/').unwrap_or(name).to_string()
}

/// Source path of the pod volume named `name`; the last match wins.
fn host_path(volumes: &[PodVolume], name: &str) -> String {
    volumes
        .iter()
        .rev()
        .find(|v| v.name == name)
        .map(|v| v.source.clone())
        .unwrap_or_default()
}

fn parse_field(container_id: &str, field: &str, value: &str) -> Result<i64> {
    parse_timestamp(value).inspect_err(|e| {
        tracing::error!(container_id = %container_id, field, error = %e, "Cannot parse provider timestamp");
    })
}

#[async_trait]
impl<P: HyperProvider> ContainerLifecycle for RuntimeAdapter<P> {
    async fn create_container(&self, sandbox_id: &str, config: &ContainerConfig) -> Result<String> {
        tracing::info!(
            sandbox_id = %sandbox_id,
            name = %config.name,
            image = %config.image,
            "CRI CreateContainer"
        );

        let spec = container_config_to_container_spec(config)?;
        self.bridge.create_container(sandbox_id, &spec).await
    }

    async fn start_container(&self, container_id: &str) -> Result<()> {
        tracing::info!(container_id = %container_id, "CRI StartContainer");
        self.bridge.start_container(container_id).await
    }

    async fn stop_container(&self, container_id: &str, timeout_secs: i64) -> Result<()> {
        tracing::info!(container_id = %container_id, timeout_secs, "CRI StopContainer");
        self.bridge.stop_container(container_id, timeout_secs).await
    }

    async fn remove_container(&self, container_id: &str) -> Result<()> {
        tracing::info!(container_id = %container_id, "CRI RemoveContainer");
        self.bridge.remove_container(container_id).await
    }

    async fn list_containers(&self, filter: Option<&ContainerFilter>) -> Result<Vec<Container>> {
        tracing::debug!(?filter, "CRI ListContainers");

        let summaries = self.provider.list_containers().await.inspect_err(|e| {
            tracing::error!(error = %e, "Get container list failed");
        })?;

        let mut containers = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let name = display_name(&summary.container_name);

            // Skip the info lookup for items the cheap predicates already exclude.
            let pod_id = Some(summary.pod_id.as_str());
            if filter.is_some_and(|f| !f.matches_identity(&summary.container_id, &name, pod_id)) {
                continue;
            }

            // One failed lookup fails the whole listing.
            let info = self
                .provider
                .container_info(&summary.container_id)
                .await
                .inspect_err(|e| {
                    tracing::error!(
                        container_id = %summary.container_id,
                        error = %e,
                        "Get container info failed"
                    );
                })?;

            let container = Container {
                id: summary.container_id,
                pod_sandbox_id: summary.pod_id,
                name,
                image: info.image,
                image_ref: info.image_id,
                state: container_state(&info.status.phase),
                labels: info.labels,
            };

            if filter.map_or(true, |f| f.matches(&container)) {
                containers.push(container);
            }
        }

        Ok(containers)
    }

    async fn container_status(&self, container_id: &str) -> Result<ContainerStatus> {
        tracing::debug!(container_id = %container_id, "CRI ContainerStatus");

        let info = self
            .provider
            .container_info(container_id)
            .await
            .inspect_err(|e| {
                tracing::error!(container_id = %container_id, error = %e, "Get container info failed");
            })?;

        let pod = self.provider.pod_info(&info.pod_id).await.inspect_err(|e| {
            tracing::error!(pod_id = %info.pod_id, error = %e, "Get pod info failed");
        })?;

        build_status(container_id, info, &pod.volumes)
    }

    async fn exec(&self, container_id: &str, cmd: &[String], tty: bool) -> Result<Vec<u8>> {
        tracing::debug!(container_id = %container_id, ?cmd, tty, "CRI Exec");
        Err(BridgeError::NotImplemented("Exec".to_string()))
    }
}

fn build_status(
    container_id: &str,
    info: ContainerInfo,
    volumes: &[PodVolume],
) -> Result<ContainerStatus> {
    let mounts = info
        .volume_mounts
        .iter()
        .map(|m| Mount {
            name: m.name.clone(),
            container_path: m.mount_path.clone(),
            host_path: host_path(volumes, &m.name),
            readonly: m.read_only,
        })
        .collect();

    let state = container_state(&info.status.phase);
    let phase = info.status;

    let mut status = ContainerStatus {
        id: info.container_id,
        name: display_name(&info.name),
        image: info.image,
        image_ref: info.image_id,
        state,
        labels: info.labels,
        created_at: info.created_at,
        started_at: None,
        finished_at: None,
        exit_code: None,
        reason: None,
        mounts,
    };

    match state {
        ContainerState::Running => {
            status.started_at = Some(parse_field(
                container_id,
                "startedAt",
                &phase.running.started_at,
            )?);
        }
        ContainerState::Exited => {
            let terminated = phase.terminated;
            status.started_at = Some(parse_field(
                container_id,
                "startedAt",
                &terminated.started_at,
            )?);
            status.finished_at = Some(parse_field(
                container_id,
                "finishedAt",
                &terminated.finished_at,
            )?);
            status.reason = Some(terminated.reason);
            status.exit_code = Some(terminated.exit_code);
        }
        ContainerState::Created | ContainerState::Unknown => {
            status.reason = Some(phase.waiting.reason);
        }
    }

    Ok(status)
}
