//! Runtime adapter: the consumer-facing surface over a provider.
//!
//! Stateless. Every query is answered from the provider's current view;
//! the adapter only holds the provider handle and its configuration.

use std::sync::Arc;

use async_trait::async_trait;

use hyperlet_core::config::BridgeConfig;
use hyperlet_core::error::Result;
use hyperlet_core::provider::HyperProvider;

use crate::bridge::LifecycleBridge;
use crate::lifecycle::RuntimeVersion;
use crate::model::VersionInfo;
use crate::timeout::TimeoutProvider;

/// Implements the sandbox, container and image capabilities on top of a
/// [`HyperProvider`].
pub struct RuntimeAdapter<P> {
    pub(crate) provider: Arc<P>,
    pub(crate) bridge: LifecycleBridge<P>,
    pub(crate) config: BridgeConfig,
}

impl<P: HyperProvider> RuntimeAdapter<P> {
    /// Create an adapter that calls `provider` directly.
    pub fn new(provider: P, config: BridgeConfig) -> Self {
        let provider = Arc::new(provider);
        Self {
            bridge: LifecycleBridge::new(provider.clone()),
            provider,
            config,
        }
    }

    /// Shared handle to the provider.
    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

impl<P: HyperProvider> RuntimeAdapter<TimeoutProvider<P>> {
    /// Create an adapter whose provider calls are bounded by
    /// `config.provider_timeout()`.
    pub fn with_timeout(provider: P, config: BridgeConfig) -> Self {
        let timeout = config.provider_timeout();
        Self::new(TimeoutProvider::new(provider, timeout), config)
    }
}

#[async_trait]
impl<P: HyperProvider> RuntimeVersion for RuntimeAdapter<P> {
    async fn version(&self) -> Result<VersionInfo> {
        let daemon = self.provider.version().await.inspect_err(|e| {
            tracing::error!(error = %e, "Get provider version failed");
        })?;

        Ok(VersionInfo {
            version: self.config.runtime_api_version.clone(),
            runtime_name: self.config.runtime_name.clone(),
            runtime_version: daemon.version,
            runtime_api_version: daemon.api_version,
        })
    }
}
