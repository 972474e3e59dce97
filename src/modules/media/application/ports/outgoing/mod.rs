mod image_processor;

pub use image_processor::{ImageProcessingError, ImageProcessor};
