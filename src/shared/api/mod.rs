mod json_config;
mod multipart;
mod response;

pub use json_config::custom_json_config;
pub use multipart::{read_multipart_form, MultipartForm, MultipartFormError};
pub use response::{ApiError, ApiResponse};
