//! Map CRI sandbox/container configs to provider specs.
//!
//! - labels + annotations → provider labels (annotations win)
//! - CPU/memory limits → vCPU count and MB, with configured defaults
//! - DNS servers and hostname pass through
//! - container entrypoint (`command`) and arguments (`args`) pass through verbatim

use hyperlet_core::config::ResourceDefaults;
use hyperlet_core::error::{BridgeError, Result};
use hyperlet_core::provider::{ContainerSpec, EnvVar, PodSpec};

use crate::metadata::merge_labels;
use crate::model::{ContainerConfig, PodSandboxConfig};
use crate::resources::translate_resources;

/// Convert a sandbox config into a pod spec.
pub fn pod_sandbox_config_to_pod_spec(
    config: &PodSandboxConfig,
    defaults: &ResourceDefaults,
) -> PodSpec {
    PodSpec {
        id: config.name.clone(),
        hostname: config.hostname.clone(),
        labels: merge_labels(&config.labels, &config.annotations),
        dns: config.dns_servers.clone().unwrap_or_default(),
        resource: translate_resources(&config.resources, defaults),
    }
}

/// Convert a container config into a container spec.
///
/// Privileged containers are rejected: the provider has no way to grant
/// privileges inside a pod.
pub fn container_config_to_container_spec(config: &ContainerConfig) -> Result<ContainerSpec> {
    if config.privileged {
        return Err(BridgeError::Validation(
            "privileged containers are not supported by the hyper runtime".to_string(),
        ));
    }

    let envs = config
        .envs
        .iter()
        .map(|kv| EnvVar {
            env: kv.key.clone(),
            value: kv.value.clone(),
        })
        .collect();

    Ok(ContainerSpec {
        name: config.name.clone(),
        image: config.image.clone(),
        workdir: config.working_dir.clone(),
        tty: config.tty,
        command: config.args.clone(),
        entrypoint: config.command.clone(),
        envs,
        labels: merge_labels(&config.labels, &config.annotations),
    })
}
