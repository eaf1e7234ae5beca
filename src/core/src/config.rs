use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use crate::error::{BridgeError, Result};

/// Bridge configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Runtime name reported by `Version`
    pub runtime_name: String,

    /// Consumer API version reported by `Version`
    pub runtime_api_version: String,

    /// Resources used when a sandbox carries no limits
    pub resources: ResourceDefaults,

    /// Upper bound for every provider call, in seconds
    pub provider_timeout_secs: u64,

    /// Address the gRPC server listens on
    pub listen_addr: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            runtime_name: "hyper".to_string(),
            runtime_api_version: "0.1.0".to_string(),
            resources: ResourceDefaults::default(),
            provider_timeout_secs: 300,
            listen_addr: "127.0.0.1:10238".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Parse a YAML document. Missing keys take their defaults.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: BridgeConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Reject values the bridge cannot operate with.
    pub fn validate(&self) -> Result<()> {
        if self.resources.vcpu == 0 {
            return Err(BridgeError::Config(
                "resources.vcpu must be at least 1".to_string(),
            ));
        }
        if self.resources.memory_mb == 0 {
            return Err(BridgeError::Config(
                "resources.memory_mb must be at least 1".to_string(),
            ));
        }
        if self.provider_timeout_secs == 0 {
            return Err(BridgeError::Config(
                "provider_timeout_secs must be greater than 0".to_string(),
            ));
        }
        self.listen_socket_addr()?;
        Ok(())
    }

    /// Provider call timeout as a `Duration`.
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Parsed listen address.
    pub fn listen_socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr.parse().map_err(|e| {
            BridgeError::Config(format!("invalid listen_addr '{}': {}", self.listen_addr, e))
        })
    }
}

/// Default pod resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDefaults {
    /// Number of virtual CPUs
    pub vcpu: i32,

    /// Memory in MB
    pub memory_mb: i32,
}

impl Default for ResourceDefaults {
    fn default() -> Self {
        Self {
            vcpu: 1,
            memory_mb: 128,
        }
    }
}
