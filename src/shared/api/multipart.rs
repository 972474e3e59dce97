// src/shared/api/multipart.rs
use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::HttpResponse;
use futures::StreamExt;

use super::ApiResponse;

/// Upper bound for a single non-file form field.
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

/// Buffered multipart/form-data body: text fields plus at most one file part.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<Vec<u8>>,
}

impl MultipartForm {
    /// Removes and returns a text field, if it was sent.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name)
    }

    /// Removes and returns the file part. Empty file parts are treated as absent.
    pub fn take_file(&mut self) -> Option<Vec<u8>> {
        self.file.take()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MultipartFormError {
    #[error("Malformed multipart body: {0}")]
    Malformed(String),

    #[error("Field '{0}' is not valid UTF-8")]
    InvalidText(String),

    #[error("Field '{field}' exceeds {limit} bytes")]
    TooLarge { field: String, limit: usize },
}

impl MultipartFormError {
    /// Envelope response shared by every multipart endpoint.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            MultipartFormError::TooLarge { limit, .. } => ApiResponse::payload_too_large(
                "IMAGE_TOO_LARGE",
                &format!("Uploaded file must not exceed {} bytes", limit),
            ),
            other => ApiResponse::bad_request("INVALID_MULTIPART", &other.to_string()),
        }
    }
}

/// Drains a multipart stream into memory.
///
/// `file_field` names the part that carries binary content; every other part
/// is decoded as UTF-8 text. Unknown fields are kept but never required.
pub async fn read_multipart_form(
    mut payload: Multipart,
    file_field: &str,
    max_file_bytes: usize,
) -> Result<MultipartForm, MultipartFormError> {
    let mut form = MultipartForm::default();

    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;
        let name = field.name().unwrap_or_default().to_string();

        let limit = if name == file_field {
            max_file_bytes
        } else {
            MAX_TEXT_FIELD_BYTES
        };

        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| MultipartFormError::Malformed(e.to_string()))?;

            if buf.len() + chunk.len() > limit {
                return Err(MultipartFormError::TooLarge { field: name, limit });
            }
            buf.extend_from_slice(&chunk);
        }

        if name == file_field {
            if !buf.is_empty() {
                form.file = Some(buf);
            }
        } else {
            let text = String::from_utf8(buf)
                .map_err(|_| MultipartFormError::InvalidText(name.clone()))?;
            form.fields.insert(name, text);
        }
    }

    Ok(form)
}
