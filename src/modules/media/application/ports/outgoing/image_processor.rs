use async_trait::async_trait;

use crate::modules::media::application::domain::entities::ImageLabel;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ImageProcessingError {
    #[error("Image could not be decoded: {0}")]
    Decode(String),

    #[error("Image rejected: {0}")]
    Rejected(String),

    #[error("Image could not be encoded: {0}")]
    Encode(String),

    #[error("Image could not be stored: {0}")]
    Storage(String),
}

#[async_trait]
pub trait ImageProcessor: Send + Sync {
    /// Crops `bytes` to the fixed output size, stores the JPEG and returns its
    /// public relative URL (`/uploads/{label}-{millis}.jpg`).
    async fn save_cropped(
        &self,
        bytes: Vec<u8>,
        label: ImageLabel,
    ) -> Result<String, ImageProcessingError>;

    /// Removes an image previously returned by `save_cropped`. Best effort:
    /// failures are logged, never returned.
    async fn discard(&self, url: &str);
}
