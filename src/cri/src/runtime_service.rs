//! CRI RuntimeService implementation.
//!
//! Thin gRPC layer: decode the request, delegate to the capability traits,
//! encode the result. Sandbox and container semantics live in the adapter.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::cri_api::runtime_service_server::RuntimeService;
use crate::cri_api::*;
use crate::error::bridge_error_to_status;
use crate::lifecycle::{ContainerLifecycle, RuntimeVersion, SandboxLifecycle};
use crate::model;

/// gRPC RuntimeService over any adapter implementing the runtime capabilities.
pub struct HyperRuntimeService<A> {
    adapter: Arc<A>,
}

impl<A> HyperRuntimeService<A> {
    pub fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }
}

#[tonic::async_trait]
impl<A> RuntimeService for HyperRuntimeService<A>
where
    A: SandboxLifecycle + ContainerLifecycle + RuntimeVersion + 'static,
{
    // ── Version ──────────────────────────────────────────────────────

    async fn version(
        &self,
        request: Request<VersionRequest>,
    ) -> Result<Response<VersionResponse>, Status> {
        let req = request.into_inner();
        tracing::debug!(client_version = %req.version(), "CRI Version");

        let info = self.adapter.version().await.map_err(bridge_error_to_status)?;
        Ok(Response::new(info.into()))
    }

    // ── Pod Sandbox ──────────────────────────────────────────────────

    async fn create_pod_sandbox(
        &self,
        request: Request<CreatePodSandboxRequest>,
    ) -> Result<Response<CreatePodSandboxResponse>, Status> {
        let config = request
            .into_inner()
            .config
            .ok_or_else(|| Status::invalid_argument("sandbox config required"))?;

        let pod_sandbox_id = self
            .adapter
            .create_pod_sandbox(&config.into())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(CreatePodSandboxResponse {
            pod_sandbox_id: Some(pod_sandbox_id),
        }))
    }

    async fn stop_pod_sandbox(
        &self,
        request: Request<StopPodSandboxRequest>,
    ) -> Result<Response<StopPodSandboxResponse>, Status> {
        let req = request.into_inner();
        self.adapter
            .stop_pod_sandbox(req.pod_sandbox_id())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(StopPodSandboxResponse {}))
    }

    async fn delete_pod_sandbox(
        &self,
        request: Request<DeletePodSandboxRequest>,
    ) -> Result<Response<DeletePodSandboxResponse>, Status> {
        let req = request.into_inner();
        self.adapter
            .delete_pod_sandbox(req.pod_sandbox_id())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(DeletePodSandboxResponse {}))
    }

    async fn pod_sandbox_status(
        &self,
        request: Request<PodSandboxStatusRequest>,
    ) -> Result<Response<PodSandboxStatusResponse>, Status> {
        let req = request.into_inner();
        let status = self
            .adapter
            .pod_sandbox_status(req.pod_sandbox_id())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(PodSandboxStatusResponse {
            status: Some(status.into()),
        }))
    }

    async fn list_pod_sandbox(
        &self,
        request: Request<ListPodSandboxRequest>,
    ) -> Result<Response<ListPodSandboxResponse>, Status> {
        let filter = request
            .into_inner()
            .filter
            .map(model::PodSandboxFilter::from);

        let sandboxes = self
            .adapter
            .list_pod_sandbox(filter.as_ref())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(ListPodSandboxResponse {
            items: sandboxes.into_iter().map(PodSandboxListItem::from).collect(),
        }))
    }

    // ── Container ────────────────────────────────────────────────────

    async fn create_container(
        &self,
        request: Request<CreateContainerRequest>,
    ) -> Result<Response<CreateContainerResponse>, Status> {
        let req = request.into_inner();
        let pod_sandbox_id = req.pod_sandbox_id().to_string();
        let config = req
            .config
            .ok_or_else(|| Status::invalid_argument("container config required"))?;

        let container_id = self
            .adapter
            .create_container(&pod_sandbox_id, &config.into())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(CreateContainerResponse {
            container_id: Some(container_id),
        }))
    }

    async fn start_container(
        &self,
        request: Request<StartContainerRequest>,
    ) -> Result<Response<StartContainerResponse>, Status> {
        let req = request.into_inner();
        self.adapter
            .start_container(req.container_id())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(StartContainerResponse {}))
    }

    async fn stop_container(
        &self,
        request: Request<StopContainerRequest>,
    ) -> Result<Response<StopContainerResponse>, Status> {
        let req = request.into_inner();
        self.adapter
            .stop_container(req.container_id(), req.timeout())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(StopContainerResponse {}))
    }

    async fn remove_container(
        &self,
        request: Request<RemoveContainerRequest>,
    ) -> Result<Response<RemoveContainerResponse>, Status> {
        let req = request.into_inner();
        self.adapter
            .remove_container(req.container_id())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(RemoveContainerResponse {}))
    }

    async fn list_containers(
        &self,
        request: Request<ListContainersRequest>,
    ) -> Result<Response<ListContainersResponse>, Status> {
        let filter = request
            .into_inner()
            .filter
            .map(model::ContainerFilter::from);

        let containers = self
            .adapter
            .list_containers(filter.as_ref())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(ListContainersResponse {
            containers: containers.into_iter().map(Container::from).collect(),
        }))
    }

    async fn container_status(
        &self,
        request: Request<ContainerStatusRequest>,
    ) -> Result<Response<ContainerStatusResponse>, Status> {
        let req = request.into_inner();
        let status = self
            .adapter
            .container_status(req.container_id())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(ContainerStatusResponse {
            status: Some(status.into()),
        }))
    }

    // ── Exec ─────────────────────────────────────────────────────────

    async fn exec(&self, request: Request<ExecRequest>) -> Result<Response<ExecResponse>, Status> {
        let req = request.into_inner();
        let stdout = self
            .adapter
            .exec(req.container_id(), &req.cmd, req.tty())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(ExecResponse {
            stdout: Some(stdout),
            stderr: None,
        }))
    }
}
