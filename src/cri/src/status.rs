//! Provider phase strings to consumer states.
//!
//! Matching is case-sensitive. Sandbox phases accept both `running` and
//! `Running` because the provider does not normalize pod phase
//! capitalization; container phases accept lowercase only.

use crate::model::{ContainerState, PodSandboxState};

/// Map a pod phase to a sandbox state.
pub fn sandbox_state(phase: &str) -> PodSandboxState {
    match phase {
        "running" | "Running" => PodSandboxState::Ready,
        _ => PodSandboxState::NotReady,
    }
}

/// Map a container phase to a container state.
pub fn container_state(phase: &str) -> ContainerState {
    match phase {
        "running" => ContainerState::Running,
        "pending" => ContainerState::Created,
        "failed" | "succeeded" => ContainerState::Exited,
        _ => ContainerState::Unknown,
    }
}
