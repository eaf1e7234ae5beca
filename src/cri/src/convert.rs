//! Conversions between the generated protobuf messages and the adapter model.
//!
//! Absent optional fields become empty values, except where the model keeps
//! presence (`dns_servers`, resource limits, filter predicates, auth fields).

use crate::cri_api as pb;
use crate::model::{
    AuthConfig, Container, ContainerConfig, ContainerFilter, ContainerState, ContainerStatus,
    Image, ImageFilter, KeyValue, Mount, PodSandbox, PodSandboxConfig, PodSandboxFilter,
    PodSandboxState, PodSandboxStatus, ResourceLimits, VersionInfo,
};

fn image_spec(image: String) -> Option<pb::ImageSpec> {
    Some(pb::ImageSpec { image: Some(image) })
}

/// Image reference carried by an `ImageSpec`, empty if absent.
pub fn image_reference(spec: Option<pb::ImageSpec>) -> String {
    spec.and_then(|s| s.image).unwrap_or_default()
}

// ── States ──────────────────────────────────────────────────────────

impl From<PodSandboxState> for pb::PodSandBoxState {
    fn from(state: PodSandboxState) -> Self {
        match state {
            PodSandboxState::Ready => Self::Ready,
            PodSandboxState::NotReady => Self::Notready,
        }
    }
}

impl From<pb::PodSandBoxState> for PodSandboxState {
    fn from(state: pb::PodSandBoxState) -> Self {
        match state {
            pb::PodSandBoxState::Ready => Self::Ready,
            pb::PodSandBoxState::Notready => Self::NotReady,
        }
    }
}

impl From<ContainerState> for pb::ContainerState {
    fn from(state: ContainerState) -> Self {
        match state {
            ContainerState::Created => Self::Created,
            ContainerState::Running => Self::Running,
            ContainerState::Exited => Self::Exited,
            ContainerState::Unknown => Self::Unknown,
        }
    }
}

impl From<pb::ContainerState> for ContainerState {
    fn from(state: pb::ContainerState) -> Self {
        match state {
            pb::ContainerState::Created => Self::Created,
            pb::ContainerState::Running => Self::Running,
            pb::ContainerState::Exited => Self::Exited,
            pb::ContainerState::Unknown => Self::Unknown,
        }
    }
}

// ── Requests ────────────────────────────────────────────────────────

impl From<pb::PodSandboxConfig> for PodSandboxConfig {
    fn from(config: pb::PodSandboxConfig) -> Self {
        let resources = config
            .resources
            .map(|r| ResourceLimits {
                cpu: r.cpu.and_then(|c| c.limits),
                memory: r.memory.and_then(|m| m.limits),
            })
            .unwrap_or_default();

        Self {
            name: config.name.unwrap_or_default(),
            hostname: config.hostname.unwrap_or_default(),
            labels: config.labels,
            annotations: config.annotations,
            dns_servers: config.dns_options.map(|dns| dns.servers),
            resources,
        }
    }
}

impl From<pb::ContainerConfig> for ContainerConfig {
    fn from(config: pb::ContainerConfig) -> Self {
        Self {
            name: config.name.unwrap_or_default(),
            image: image_reference(config.image),
            command: config.command,
            args: config.args,
            working_dir: config.working_dir.unwrap_or_default(),
            envs: config
                .envs
                .into_iter()
                .map(|kv| KeyValue {
                    key: kv.key.unwrap_or_default(),
                    value: kv.value.unwrap_or_default(),
                })
                .collect(),
            labels: config.labels,
            annotations: config.annotations,
            privileged: config.privileged.unwrap_or(false),
            tty: config.tty.unwrap_or(false),
        }
    }
}

impl From<pb::PodSandboxFilter> for PodSandboxFilter {
    fn from(filter: pb::PodSandboxFilter) -> Self {
        let state = filter.state.map(|_| filter.state().into());
        Self {
            id: filter.id,
            name: filter.name,
            pod_id: None,
            state,
            label_selector: filter.label_selector,
        }
    }
}

impl From<pb::ContainerFilter> for ContainerFilter {
    fn from(filter: pb::ContainerFilter) -> Self {
        let state = filter.state.map(|_| filter.state().into());
        Self {
            id: filter.id,
            name: filter.name,
            pod_id: filter.pod_sandbox_id,
            state,
            label_selector: filter.label_selector,
        }
    }
}

impl From<pb::ImageFilter> for ImageFilter {
    fn from(filter: pb::ImageFilter) -> Self {
        Self {
            image: filter.image.and_then(|s| s.image),
        }
    }
}

impl From<pb::AuthConfig> for AuthConfig {
    fn from(auth: pb::AuthConfig) -> Self {
        Self {
            username: auth.username,
            password: auth.password,
            auth: auth.auth,
            registry_token: auth.registry_token,
            server_address: auth.server_address,
        }
    }
}

// ── Responses ───────────────────────────────────────────────────────

impl From<PodSandboxStatus> for pb::PodSandboxStatus {
    fn from(status: PodSandboxStatus) -> Self {
        Self {
            id: Some(status.id),
            name: Some(status.name),
            state: Some(pb::PodSandBoxState::from(status.state).into()),
            created_at: Some(status.created_at),
            network: Some(pb::PodSandboxNetworkStatus {
                ip: Some(status.ip),
            }),
            labels: status.labels,
        }
    }
}

impl From<PodSandbox> for pb::PodSandboxListItem {
    fn from(sandbox: PodSandbox) -> Self {
        Self {
            id: Some(sandbox.id),
            name: Some(sandbox.name),
            state: Some(pb::PodSandBoxState::from(sandbox.state).into()),
            created_at: Some(sandbox.created_at),
            labels: sandbox.labels,
        }
    }
}

impl From<Container> for pb::Container {
    fn from(container: Container) -> Self {
        Self {
            id: Some(container.id),
            pod_sandbox_id: Some(container.pod_sandbox_id),
            name: Some(container.name),
            image: image_spec(container.image),
            image_ref: Some(container.image_ref),
            state: Some(pb::ContainerState::from(container.state).into()),
            labels: container.labels,
        }
    }
}

impl From<Mount> for pb::Mount {
    fn from(mount: Mount) -> Self {
        Self {
            name: Some(mount.name),
            container_path: Some(mount.container_path),
            host_path: Some(mount.host_path),
            readonly: Some(mount.readonly),
        }
    }
}

impl From<ContainerStatus> for pb::ContainerStatus {
    fn from(status: ContainerStatus) -> Self {
        Self {
            id: Some(status.id),
            name: Some(status.name),
            state: Some(pb::ContainerState::from(status.state).into()),
            created_at: Some(status.created_at),
            started_at: status.started_at,
            finished_at: status.finished_at,
            exit_code: status.exit_code,
            image: image_spec(status.image),
            image_ref: Some(status.image_ref),
            reason: status.reason,
            labels: status.labels,
            mounts: status.mounts.into_iter().map(pb::Mount::from).collect(),
        }
    }
}

impl From<Image> for pb::Image {
    fn from(image: Image) -> Self {
        Self {
            id: Some(image.id),
            repo_tags: image.repo_tags,
            repo_digests: image.repo_digests,
            size: Some(image.size),
        }
    }
}

impl From<VersionInfo> for pb::VersionResponse {
    fn from(info: VersionInfo) -> Self {
        Self {
            version: Some(info.version),
            runtime_name: Some(info.runtime_name),
            runtime_version: Some(info.runtime_version),
            runtime_api_version: Some(info.runtime_api_version),
        }
    }
}
