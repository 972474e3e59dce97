use std::fs::OpenOptions;
use std::io::{self, Cursor, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use chrono::Utc;
use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, GenericImageView, ImageReader};
use tracing::{info, warn};

use crate::modules::media::application::{
    domain::{entities::ImageLabel, policies::ImagePolicy},
    ports::outgoing::{ImageProcessingError, ImageProcessor},
};

/// Writes cropped JPEGs into a local directory that is served under `/uploads`.
#[derive(Debug, Clone)]
pub struct LocalImageProcessor {
    upload_dir: PathBuf,
    policy: ImagePolicy,
}

impl LocalImageProcessor {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self::with_policy(upload_dir, ImagePolicy::new())
    }

    pub fn with_policy(upload_dir: impl Into<PathBuf>, policy: ImagePolicy) -> Self {
        Self {
            upload_dir: upload_dir.into(),
            policy,
        }
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Creates the upload directory (and parents) if it does not exist yet.
    pub fn ensure_upload_dir(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.upload_dir)
    }
}

#[async_trait]
impl ImageProcessor for LocalImageProcessor {
    async fn save_cropped(
        &self,
        bytes: Vec<u8>,
        label: ImageLabel,
    ) -> Result<String, ImageProcessingError> {
        let upload_dir = self.upload_dir.clone();
        let policy = self.policy.clone();
        let unix_millis = Utc::now().timestamp_millis();
        let input_len = bytes.len();
        let started = Instant::now();

        // Decode/resize/encode is CPU-bound
        let file_name = tokio::task::spawn_blocking(move || {
            let jpeg = crop_to_jpeg(&bytes, &policy)?;
            write_new_file(&upload_dir, &policy, label, unix_millis, &jpeg)
        })
        .await
        .map_err(|e| ImageProcessingError::Storage(format!("Image task failed: {e}")))?
        .map_err(|e| {
            warn!(label = %label, error = %e, "Image processing failed");
            e
        })?;

        info!(
            label = %label,
            file = %file_name,
            input_bytes = input_len,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Stored cropped image"
        );

        Ok(self.policy.public_url(&file_name))
    }

    async fn discard(&self, url: &str) {
        let Some(file_name) = self.policy.file_name_from_url(url) else {
            warn!(url = %url, "Refusing to discard image outside the upload directory");
            return;
        };

        match std::fs::remove_file(self.upload_dir.join(file_name)) {
            Ok(()) => info!(file = %file_name, "Discarded orphaned image"),
            Err(e) => warn!(file = %file_name, error = %e, "Failed to discard image"),
        }
    }
}

/// Attempts before giving up on finding a free file name.
const MAX_NAME_ATTEMPTS: i64 = 32;

/// Writes `jpeg` under the first unused `{label}-{millis}.jpg`, stepping the
/// timestamp forward when a name is taken. Returns the file name.
fn write_new_file(
    dir: &Path,
    policy: &ImagePolicy,
    label: ImageLabel,
    unix_millis: i64,
    jpeg: &[u8],
) -> Result<String, ImageProcessingError> {
    for offset in 0..MAX_NAME_ATTEMPTS {
        let file_name = policy.file_name(label, unix_millis + offset);
        let path = dir.join(&file_name);

        let mut file = match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(e) => return Err(ImageProcessingError::Storage(e.to_string())),
        };

        if let Err(e) = file.write_all(jpeg) {
            drop(file);
            let _ = std::fs::remove_file(&path);
            return Err(ImageProcessingError::Storage(e.to_string()));
        }

        return Ok(file_name);
    }

    Err(ImageProcessingError::Storage(format!(
        "No free {label} file name after {MAX_NAME_ATTEMPTS} attempts"
    )))
}

fn crop_to_jpeg(bytes: &[u8], policy: &ImagePolicy) -> Result<Vec<u8>, ImageProcessingError> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ImageProcessingError::Decode(format!("Failed to guess format: {e}")))?
        .decode()
        .map_err(|e| ImageProcessingError::Decode(format!("Failed to decode image: {e}")))?;

    let (w, h) = img.dimensions();
    policy
        .check_dimensions(w, h)
        .map_err(|e| ImageProcessingError::Rejected(e.to_string()))?;

    // Scale to cover the target box, then centre-crop the overflow
    let rgb = img
        .resize_to_fill(policy.target_width, policy.target_height, FilterType::Lanczos3)
        .to_rgb8();

    let mut out = Vec::new();
    {
        let mut encoder = JpegEncoder::new_with_quality(&mut out, policy.jpeg_quality);
        encoder
            .encode_image(&rgb)
            .map_err(|e| ImageProcessingError::Encode(e.to_string()))?;
    }

    Ok(out)
}
