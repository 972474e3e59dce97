use crate::modules::media::application::domain::entities::ImageLabel;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImagePolicyViolation {
    #[error("Image too large: {width}x{height} (max {max}x{max})")]
    DimensionsExceeded { width: u32, height: u32, max: u32 },

    #[error("Image has too many pixels: {pixels} (max {max})")]
    PixelsExceeded { pixels: u64, max: u64 },

    #[error("Image has no pixels")]
    Empty,
}

/// Output geometry and input limits for uploaded record images.
#[derive(Debug, Clone)]
pub struct ImagePolicy {
    pub target_width: u32,
    pub target_height: u32,
    pub max_width_height_px: u32,
    pub max_total_pixels: u64,
    pub jpeg_quality: u8,
    pub public_prefix: &'static str,
}

impl ImagePolicy {
    pub const TARGET_WIDTH: u32 = 450;
    pub const TARGET_HEIGHT: u32 = 350;
    pub const PUBLIC_PREFIX: &'static str = "/uploads";

    pub fn new() -> Self {
        Self {
            target_width: Self::TARGET_WIDTH,
            target_height: Self::TARGET_HEIGHT,
            max_width_height_px: 6000,
            max_total_pixels: 20_000_000, // 20MP
            jpeg_quality: 85,
            public_prefix: Self::PUBLIC_PREFIX,
        }
    }

    pub fn check_dimensions(&self, width: u32, height: u32) -> Result<(), ImagePolicyViolation> {
        if width == 0 || height == 0 {
            return Err(ImagePolicyViolation::Empty);
        }

        if width > self.max_width_height_px || height > self.max_width_height_px {
            return Err(ImagePolicyViolation::DimensionsExceeded {
                width,
                height,
                max: self.max_width_height_px,
            });
        }

        let pixels = (width as u64) * (height as u64);
        if pixels > self.max_total_pixels {
            return Err(ImagePolicyViolation::PixelsExceeded {
                pixels,
                max: self.max_total_pixels,
            });
        }

        Ok(())
    }

    /// `{label}-{unix_millis}.jpg`
    pub fn file_name(&self, label: ImageLabel, unix_millis: i64) -> String {
        format!("{}-{}.jpg", label.as_str(), unix_millis)
    }

    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix, file_name)
    }

    /// Inverse of `public_url`. Anything that is not a plain file name under
    /// the public prefix yields `None`.
    pub fn file_name_from_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        let name = url
            .strip_prefix(self.public_prefix)?
            .strip_prefix('/')?;

        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }
        Some(name)
    }
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self::new()
    }
}
