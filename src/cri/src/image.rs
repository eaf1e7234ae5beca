//! Image operations.

use async_trait::async_trait;

use hyperlet_core::error::{BridgeError, Result};
use hyperlet_core::provider::{HyperProvider, ImageInfo};

use crate::adapter::RuntimeAdapter;
use crate::lifecycle::ImageLifecycle;
use crate::model::{AuthConfig, Image, ImageFilter};
use crate::reference::{parse_repository_tag, registry_auth};

impl From<ImageInfo> for Image {
    fn from(info: ImageInfo) -> Self {
        Self {
            id: info.id,
            repo_tags: info.repo_tags,
            repo_digests: info.repo_digests,
            // A negative size from the provider is reported as zero.
            size: u64::try_from(info.virtual_size).unwrap_or(0),
        }
    }
}

#[async_trait]
impl<P: HyperProvider> ImageLifecycle for RuntimeAdapter<P> {
    async fn list_images(&self, filter: Option<&ImageFilter>) -> Result<Vec<Image>> {
        tracing::debug!(?filter, "CRI ListImages");

        let images = self.provider.list_images().await.inspect_err(|e| {
            tracing::error!(error = %e, "Get image list failed");
        })?;

        Ok(images
            .into_iter()
            .map(Image::from)
            .filter(|image| filter.map_or(true, |f| f.matches(image)))
            .collect())
    }

    async fn image_status(&self, image: &str) -> Result<Image> {
        tracing::debug!(image = %image, "CRI ImageStatus");
        Err(BridgeError::NotImplemented("ImageStatus".to_string()))
    }

    async fn pull_image(&self, image: &str, auth: Option<&AuthConfig>) -> Result<()> {
        let (repo, tag) = parse_repository_tag(image);
        tracing::info!(image = %image, repo = %repo, tag = %tag, "CRI PullImage");

        let credentials = registry_auth(auth);
        self.provider
            .pull_image(&repo, &tag, &credentials)
            .await
            .inspect_err(|e| {
                tracing::error!(image = %image, error = %e, "Pull image failed");
            })
    }

    async fn remove_image(&self, image: &str) -> Result<()> {
        tracing::info!(image = %image, "CRI RemoveImage");

        self.provider.remove_image(image).await.inspect_err(|e| {
            tracing::error!(image = %image, error = %e, "Remove image failed");
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_size_reported_as_zero() {
        let image = Image::from(ImageInfo {
            id: "sha256:1".to_string(),
            virtual_size: -1,
            ..Default::default()
        });
        assert_eq!(image.size, 0);
    }

    #[test]
    fn test_image_fields_copied() {
        let image = Image::from(ImageInfo {
            id: "sha256:1".to_string(),
            repo_tags: vec!["busybox:latest".to_string()],
            repo_digests: vec!["busybox@sha256:1".to_string()],
            virtual_size: 1_234,
        });
        assert_eq!(image.id, "sha256:1");
        assert_eq!(image.repo_tags, vec!["busybox:latest"]);
        assert_eq!(image.repo_digests, vec!["busybox@sha256:1"]);
        assert_eq!(image.size, 1_234);
    }
}
