mod local_image_processor;

pub use local_image_processor::LocalImageProcessor;
