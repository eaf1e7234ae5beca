//! In-memory provider for adapter and gRPC tests.
//!
//! Records every provider call in order so tests can assert on the exact
//! call sequence the adapter produced.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use hyperlet_core::error::{BridgeError, Result};
use hyperlet_core::provider::{
    ContainerInfo, ContainerPhase, ContainerSpec, ContainerSummary, DaemonVersion, HyperProvider,
    ImageInfo, PodInfo, PodSpec, PodSummary, RegistryAuth, StopOutcome,
};

/// One recorded provider call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreatePod(PodSpec),
    StartPod(String),
    StopPod(String),
    RemovePod(String),
    PodInfo(String),
    ListPods,
    CreateContainer(String, ContainerSpec),
    ContainerInfo(String),
    ListContainers,
    ListImages,
    PullImage(String, String, RegistryAuth),
    RemoveImage(String),
    Version,
}

#[derive(Default)]
struct State {
    pods: Vec<PodInfo>,
    containers: Vec<ContainerInfo>,
    images: Vec<ImageInfo>,
    calls: Vec<Call>,
    fail_start_pod: bool,
    fail_container_info: HashSet<String>,
    delay: Option<Duration>,
}

#[derive(Default)]
pub struct FakeHyper {
    state: Mutex<State>,
}

impl FakeHyper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pod(self, pod: PodInfo) -> Self {
        self.state.lock().pods.push(pod);
        self
    }

    pub fn with_container(self, container: ContainerInfo) -> Self {
        self.state.lock().containers.push(container);
        self
    }

    pub fn with_image(self, image: ImageInfo) -> Self {
        self.state.lock().images.push(image);
        self
    }

    /// Make every `start_pod` fail.
    pub fn failing_start_pod(self) -> Self {
        self.state.lock().fail_start_pod = true;
        self
    }

    /// Make `container_info` fail for one container id.
    pub fn failing_container_info(self, container_id: &str) -> Self {
        self.state
            .lock()
            .fail_container_info
            .insert(container_id.to_string());
        self
    }

    /// Delay every call before answering.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.state.lock().delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    pub fn pod_phase(&self, pod_id: &str) -> Option<String> {
        self.state
            .lock()
            .pods
            .iter()
            .find(|p| p.pod_id == pod_id)
            .map(|p| p.phase.clone())
    }

    async fn record(&self, call: Call) {
        let delay = {
            let mut state = self.state.lock();
            state.calls.push(call);
            state.delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn set_phase(&self, pod_id: &str, phase: &str) -> Result<()> {
        let mut state = self.state.lock();
        let pod = state
            .pods
            .iter_mut()
            .find(|p| p.pod_id == pod_id)
            .ok_or_else(|| BridgeError::Provider(format!("pod {} not found", pod_id)))?;
        pod.phase = phase.to_string();
        Ok(())
    }
}

#[async_trait]
impl HyperProvider for FakeHyper {
    async fn create_pod(&self, spec: &PodSpec) -> Result<String> {
        self.record(Call::CreatePod(spec.clone())).await;
        self.state.lock().pods.push(PodInfo {
            pod_id: spec.id.clone(),
            pod_name: spec.id.clone(),
            created_at: 1_000,
            labels: spec.labels.clone(),
            phase: "pending".to_string(),
            ..Default::default()
        });
        Ok(spec.id.clone())
    }

    async fn start_pod(&self, pod_id: &str) -> Result<()> {
        self.record(Call::StartPod(pod_id.to_string())).await;
        if self.state.lock().fail_start_pod {
            return Err(BridgeError::Provider("vm boot failed".to_string()));
        }
        self.set_phase(pod_id, "running")
    }

    async fn stop_pod(&self, pod_id: &str) -> Result<StopOutcome> {
        self.record(Call::StopPod(pod_id.to_string())).await;
        self.set_phase(pod_id, "failed")?;
        Ok(StopOutcome {
            code: 0,
            cause: "stopped".to_string(),
        })
    }

    async fn remove_pod(&self, pod_id: &str) -> Result<()> {
        self.record(Call::RemovePod(pod_id.to_string())).await;
        let mut state = self.state.lock();
        state.pods.retain(|p| p.pod_id != pod_id);
        state.containers.retain(|c| c.pod_id != pod_id);
        Ok(())
    }

    async fn pod_info(&self, pod_id: &str) -> Result<PodInfo> {
        self.record(Call::PodInfo(pod_id.to_string())).await;
        self.state
            .lock()
            .pods
            .iter()
            .find(|p| p.pod_id == pod_id)
            .cloned()
            .ok_or_else(|| BridgeError::Provider(format!("pod {} not found", pod_id)))
    }

    async fn list_pods(&self) -> Result<Vec<PodSummary>> {
        self.record(Call::ListPods).await;
        Ok(self
            .state
            .lock()
            .pods
            .iter()
            .map(|p| PodSummary {
                pod_id: p.pod_id.clone(),
                pod_name: p.pod_name.clone(),
                status: p.phase.clone(),
                labels: p.labels.clone(),
                created_at: p.created_at,
            })
            .collect())
    }

    async fn create_container(&self, pod_id: &str, spec: &ContainerSpec) -> Result<String> {
        self.record(Call::CreateContainer(pod_id.to_string(), spec.clone()))
            .await;
        let mut state = self.state.lock();
        let container_id = format!("{}-{}", pod_id, spec.name);
        state.containers.push(ContainerInfo {
            container_id: container_id.clone(),
            name: format!("/{}", spec.name),
            pod_id: pod_id.to_string(),
            image: spec.image.clone(),
            image_id: format!("sha256:{}", spec.image),
            labels: spec.labels.clone(),
            created_at: 2_000,
            status: ContainerPhase {
                phase: "pending".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        Ok(container_id)
    }

    async fn container_info(&self, container_id: &str) -> Result<ContainerInfo> {
        self.record(Call::ContainerInfo(container_id.to_string()))
            .await;
        let state = self.state.lock();
        if state.fail_container_info.contains(container_id) {
            return Err(BridgeError::Provider(format!(
                "container {} info unavailable",
                container_id
            )));
        }
        state
            .containers
            .iter()
            .find(|c| c.container_id == container_id)
            .cloned()
            .ok_or_else(|| BridgeError::Provider(format!("container {} not found", container_id)))
    }

    async fn list_containers(&self) -> Result<Vec<ContainerSummary>> {
        self.record(Call::ListContainers).await;
        Ok(self
            .state
            .lock()
            .containers
            .iter()
            .map(|c| ContainerSummary {
                container_id: c.container_id.clone(),
                container_name: c.name.clone(),
                pod_id: c.pod_id.clone(),
                status: c.status.phase.clone(),
            })
            .collect())
    }

    async fn list_images(&self) -> Result<Vec<ImageInfo>> {
        self.record(Call::ListImages).await;
        Ok(self.state.lock().images.clone())
    }

    async fn pull_image(&self, repo: &str, tag: &str, auth: &RegistryAuth) -> Result<()> {
        self.record(Call::PullImage(
            repo.to_string(),
            tag.to_string(),
            auth.clone(),
        ))
        .await;
        Ok(())
    }

    async fn remove_image(&self, image: &str) -> Result<()> {
        self.record(Call::RemoveImage(image.to_string())).await;
        let mut state = self.state.lock();
        let before = state.images.len();
        state
            .images
            .retain(|i| !i.repo_tags.iter().any(|t| t == image) && i.id != image);
        if state.images.len() == before {
            return Err(BridgeError::Provider(format!("image {} not found", image)));
        }
        Ok(())
    }

    async fn version(&self) -> Result<DaemonVersion> {
        self.record(Call::Version).await;
        Ok(DaemonVersion {
            version: "0.8.1".to_string(),
            api_version: "4242".to_string(),
        })
    }
}

pub fn labels(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

pub fn pod(id: &str, phase: &str, pairs: &[(&str, &str)]) -> PodInfo {
    PodInfo {
        pod_id: id.to_string(),
        pod_name: id.to_string(),
        created_at: 1_000,
        labels: labels(pairs),
        phase: phase.to_string(),
        ..Default::default()
    }
}

pub fn container(id: &str, pod_id: &str, phase: &str, pairs: &[(&str, &str)]) -> ContainerInfo {
    ContainerInfo {
        container_id: id.to_string(),
        name: format!("/{}", id),
        pod_id: pod_id.to_string(),
        image: "busybox".to_string(),
        image_id: "sha256:busybox".to_string(),
        labels: labels(pairs),
        created_at: 2_000,
        status: ContainerPhase {
            phase: phase.to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}
