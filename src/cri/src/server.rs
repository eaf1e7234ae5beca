//! gRPC server setup for CRI services.
//!
//! Serves RuntimeService and ImageService over TCP.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::server::Router;
use tonic::transport::Server;

use crate::cri_api::image_service_server::ImageServiceServer;
use crate::cri_api::runtime_service_server::RuntimeServiceServer;
use crate::image_service::HyperImageService;
use crate::lifecycle::{ContainerLifecycle, ImageLifecycle, RuntimeVersion, SandboxLifecycle};
use crate::runtime_service::HyperRuntimeService;

/// CRI gRPC server over a shared adapter.
pub struct CriServer<A> {
    adapter: Arc<A>,
}

impl<A> CriServer<A>
where
    A: SandboxLifecycle + ContainerLifecycle + ImageLifecycle + RuntimeVersion + 'static,
{
    pub fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }

    fn router(&self) -> Router {
        Server::builder()
            .add_service(RuntimeServiceServer::new(HyperRuntimeService::new(
                self.adapter.clone(),
            )))
            .add_service(ImageServiceServer::new(HyperImageService::new(
                self.adapter.clone(),
            )))
    }

    /// Bind `addr` and serve until the transport fails.
    pub async fn serve(
        &self,
        addr: SocketAddr,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind(addr).await?;
        self.serve_with_listener(listener).await
    }

    /// Serve on an already-bound listener.
    pub async fn serve_with_listener(
        &self,
        listener: TcpListener,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let local_addr = listener.local_addr()?;
        tracing::info!(addr = %local_addr, "CRI server listening");

        self.router()
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await?;

        Ok(())
    }
}
