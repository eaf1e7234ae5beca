//! Provider contract: the pod-centric daemon the bridge drives.
//!
//! The daemon only knows pods. Containers can be created, listed and
//! inspected, but there is no per-container start, stop or remove verb.

use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Pod creation spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodSpec {
    /// Requested pod id (the sandbox name).
    pub id: String,
    pub hostname: String,
    /// Labels and annotations, merged.
    pub labels: HashMap<String, String>,
    /// DNS servers in order.
    pub dns: Vec<String>,
    pub resource: PodResource,
}

/// Pod sizing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PodResource {
    pub vcpu: i32,
    /// Memory in MB.
    pub memory: i32,
}

/// Detailed pod state returned by pod info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PodInfo {
    pub pod_id: String,
    pub pod_name: String,
    /// Unix seconds.
    pub created_at: i64,
    pub labels: HashMap<String, String>,
    pub volumes: Vec<PodVolume>,
    /// Raw phase string, capitalization not normalized.
    pub phase: String,
    pub pod_ips: Vec<String>,
}

/// Volume declared on a pod.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodVolume {
    pub name: String,
    /// Host-side source path.
    pub source: String,
}

/// Pod entry from a pod listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PodSummary {
    pub pod_id: String,
    pub pod_name: String,
    /// Raw phase string.
    pub status: String,
    pub labels: HashMap<String, String>,
    pub created_at: i64,
}

/// Outcome of a pod stop.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopOutcome {
    pub code: i32,
    pub cause: String,
}

/// Container creation spec.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    pub name: String,
    pub image: String,
    pub workdir: String,
    pub tty: bool,
    /// Arguments passed to the entrypoint.
    pub command: Vec<String>,
    pub entrypoint: Vec<String>,
    pub envs: Vec<EnvVar>,
    pub labels: HashMap<String, String>,
}

/// Environment variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub env: String,
    pub value: String,
}

/// Container entry from a container listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerSummary {
    pub container_id: String,
    /// Provider name, usually carrying a leading `/`.
    pub container_name: String,
    pub pod_id: String,
    pub status: String,
}

/// Detailed container state returned by container info.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerInfo {
    pub container_id: String,
    pub name: String,
    pub pod_id: String,
    pub image: String,
    pub image_id: String,
    pub labels: HashMap<String, String>,
    pub volume_mounts: Vec<VolumeMount>,
    pub created_at: i64,
    pub status: ContainerPhase,
}

/// Volume mounted into a container, referencing a pod volume by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeMount {
    pub name: String,
    pub mount_path: String,
    pub read_only: bool,
}

/// Container phase plus the per-phase details.
///
/// The provider usually sends only the block of the active phase; absent
/// blocks decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerPhase {
    pub phase: String,
    pub running: RunningState,
    pub terminated: TerminatedState,
    pub waiting: WaitingState,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunningState {
    /// `YYYY-MM-DDThh:mm:ssZ` or empty.
    pub started_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminatedState {
    pub started_at: String,
    pub finished_at: String,
    pub reason: String,
    pub exit_code: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaitingState {
    pub reason: String,
}

/// Image known to the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    pub id: String,
    pub repo_tags: Vec<String>,
    pub repo_digests: Vec<String>,
    pub virtual_size: i64,
}

/// Registry credentials forwarded with a pull.
///
/// Unset fields are omitted on the wire; an empty string is a set field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryAuth {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_address: Option<String>,
}

/// Daemon version pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonVersion {
    pub version: String,
    pub api_version: String,
}

/// Client for the provider daemon.
///
/// Implementations own connection handling. Errors carry the daemon's
/// message unmodified.
#[async_trait]
pub trait HyperProvider: Send + Sync {
    /// Create a pod and return its id.
    async fn create_pod(&self, spec: &PodSpec) -> Result<String>;

    async fn start_pod(&self, pod_id: &str) -> Result<()>;

    async fn stop_pod(&self, pod_id: &str) -> Result<StopOutcome>;

    /// Remove a pod together with all of its containers.
    async fn remove_pod(&self, pod_id: &str) -> Result<()>;

    async fn pod_info(&self, pod_id: &str) -> Result<PodInfo>;

    async fn list_pods(&self) -> Result<Vec<PodSummary>>;

    /// Create a container inside a pod and return its id.
    async fn create_container(&self, pod_id: &str, spec: &ContainerSpec) -> Result<String>;

    async fn container_info(&self, container_id: &str) -> Result<ContainerInfo>;

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>>;

    async fn list_images(&self) -> Result<Vec<ImageInfo>>;

    async fn pull_image(&self, repo: &str, tag: &str, auth: &RegistryAuth) -> Result<()>;

    async fn remove_image(&self, image: &str) -> Result<()>;

    async fn version(&self) -> Result<DaemonVersion>;
}
