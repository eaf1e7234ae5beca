//! Consumer-side object model.
//!
//! These are the shapes the orchestrator sees. They are rebuilt from the
//! provider on every query; nothing here is cached.

use std::collections::HashMap;

use crate::filter::Filter;

/// Observed sandbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PodSandboxState {
    /// Sandbox is running and ready.
    Ready,
    /// Any other provider phase.
    NotReady,
}

/// Observed container state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    Created,
    Running,
    Exited,
    Unknown,
}

/// CPU and memory limits as the orchestrator expresses them.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResourceLimits {
    /// Fractional cores.
    pub cpu: Option<f64>,
    /// Bytes.
    pub memory: Option<f64>,
}

/// Sandbox creation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PodSandboxConfig {
    pub name: String,
    pub hostname: String,
    pub labels: HashMap<String, String>,
    pub annotations: HashMap<String, String>,
    /// `None` when the request carries no DNS options.
    pub dns_servers: Option<Vec<String>>,
    pub resources: ResourceLimits,
}

/// Sandbox status as returned by `PodSandboxStatus`.
#[derive(Debug, Clone, PartialEq)]
pub struct PodSandboxStatus {
    pub id: String,
    pub name: String,
    pub state: PodSandboxState,
    pub created_at: i64,
    /// First provider-reported address, empty if none.
    pub ip: String,
    pub labels: HashMap<String, String>,
}

/// Sandbox entry returned by `ListPodSandbox`.
#[derive(Debug, Clone, PartialEq)]
pub struct PodSandbox {
    pub id: String,
    pub name: String,
    pub state: PodSandboxState,
    pub created_at: i64,
    pub labels: HashMap<String, String>,
}

/// Environment variable on a container request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// Container creation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContainerConfig {
    pub name: String,
    pub image: String,
    /// Entrypoint.
    pub command: Vec<String>,
    /// Arguments to the entrypoint.
    pub args: Vec<String>,
    pub working_dir: String,
    pub envs: Vec<KeyValue>,
    pub labels: HashMap<String, String>,
    pub annotations: HashMap<String, String>,
    pub privileged: bool,
    pub tty: bool,
}

/// Container entry returned by `ListContainers`.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub id: String,
    pub pod_sandbox_id: String,
    /// Provider name without its leading `/`.
    pub name: String,
    pub image: String,
    pub image_ref: String,
    pub state: ContainerState,
    pub labels: HashMap<String, String>,
}

/// Mount reported in a container status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mount {
    pub name: String,
    pub container_path: String,
    /// Source of the same-named pod volume, empty if none matches.
    pub host_path: String,
    pub readonly: bool,
}

/// Container status as returned by `ContainerStatus`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerStatus {
    pub id: String,
    pub name: String,
    pub image: String,
    pub image_ref: String,
    pub state: ContainerState,
    pub labels: HashMap<String, String>,
    pub created_at: i64,
    /// Set for running and exited containers.
    pub started_at: Option<i64>,
    /// Set for exited containers.
    pub finished_at: Option<i64>,
    /// Set for exited containers.
    pub exit_code: Option<i32>,
    /// Terminated reason when exited, waiting reason otherwise.
    pub reason: Option<String>,
    pub mounts: Vec<Mount>,
}

/// Image entry returned by `ListImages`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    pub id: String,
    pub repo_tags: Vec<String>,
    pub repo_digests: Vec<String>,
    pub size: u64,
}

/// Registry credentials as supplied by the orchestrator.
///
/// `None` means the field was absent from the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub auth: Option<String>,
    pub registry_token: Option<String>,
    pub server_address: Option<String>,
}

/// Image listing filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageFilter {
    /// Image reference; a missing tag means `latest`.
    pub image: Option<String>,
}

/// Answer to `Version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    pub version: String,
    pub runtime_name: String,
    pub runtime_version: String,
    pub runtime_api_version: String,
}

pub type PodSandboxFilter = Filter<PodSandboxState>;
pub type ContainerFilter = Filter<ContainerState>;
