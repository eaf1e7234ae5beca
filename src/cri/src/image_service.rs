//! CRI ImageService implementation.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::convert::image_reference;
use crate::cri_api::image_service_server::ImageService;
use crate::cri_api::*;
use crate::error::bridge_error_to_status;
use crate::lifecycle::ImageLifecycle;
use crate::model;

/// gRPC ImageService over any adapter implementing [`ImageLifecycle`].
pub struct HyperImageService<A> {
    adapter: Arc<A>,
}

impl<A> HyperImageService<A> {
    pub fn new(adapter: Arc<A>) -> Self {
        Self { adapter }
    }
}

#[tonic::async_trait]
impl<A: ImageLifecycle + 'static> ImageService for HyperImageService<A> {
    async fn list_images(
        &self,
        request: Request<ListImagesRequest>,
    ) -> Result<Response<ListImagesResponse>, Status> {
        let filter = request.into_inner().filter.map(model::ImageFilter::from);

        let images = self
            .adapter
            .list_images(filter.as_ref())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(ListImagesResponse {
            images: images.into_iter().map(Image::from).collect(),
        }))
    }

    async fn image_status(
        &self,
        request: Request<ImageStatusRequest>,
    ) -> Result<Response<ImageStatusResponse>, Status> {
        let image = image_reference(request.into_inner().image);

        let status = self
            .adapter
            .image_status(&image)
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(ImageStatusResponse {
            image: Some(status.into()),
        }))
    }

    async fn pull_image(
        &self,
        request: Request<PullImageRequest>,
    ) -> Result<Response<PullImageResponse>, Status> {
        let req = request.into_inner();
        let image = image_reference(req.image);
        let auth = req.auth.map(model::AuthConfig::from);

        self.adapter
            .pull_image(&image, auth.as_ref())
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(PullImageResponse {}))
    }

    async fn remove_image(
        &self,
        request: Request<RemoveImageRequest>,
    ) -> Result<Response<RemoveImageResponse>, Status> {
        let image = image_reference(request.into_inner().image);

        self.adapter
            .remove_image(&image)
            .await
            .map_err(bridge_error_to_status)?;

        Ok(Response::new(RemoveImageResponse {}))
    }
}
