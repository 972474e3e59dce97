use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    modules::client::application::ports::{
        incoming::use_cases::{ClientCommandError, CreateClientCommand, CreateClientError},
        outgoing::ClientResult,
    },
    shared::api::{read_multipart_form, ApiResponse},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// multipart/form-data body for creating a client testimonial
#[derive(Debug, ToSchema)]
pub struct CreateClientForm {
    #[schema(example = "Maya Okafor")]
    pub name: String,

    #[schema(example = "Operations Lead, Brightline Logistics")]
    pub designation: String,

    pub description: String,

    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a client
#[utoipa::path(
    post,
    path = "/api/admin/clients",
    tag = "clients",
    request_body(content = CreateClientForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Client created", body = ClientResult),
        (status = 400, description = "Missing field or malformed form", body = ErrorResponse),
        (status = 413, description = "Image exceeds the upload limit", body = ErrorResponse),
        (status = 500, description = "Image processing or storage failure", body = ErrorResponse)
    )
)]
#[post("/api/admin/clients")]
pub async fn create_client_handler(
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let mut form = match read_multipart_form(payload, "image", data.max_upload_bytes).await {
        Ok(form) => form,
        Err(err) => {
            warn!(error = %err, "Rejected client form");
            return err.to_response();
        }
    };

    let command = match CreateClientCommand::new(
        form.take_text("name"),
        form.take_text("designation"),
        form.take_text("description"),
        form.take_file(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.client.create.execute(command).await {
        Ok(client) => ApiResponse::created(client),
        Err(err) => map_create_client_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: ClientCommandError) -> HttpResponse {
    ApiResponse::bad_request("MISSING_FIELD", &err.to_string())
}

fn map_create_client_error(err: CreateClientError) -> HttpResponse {
    match err {
        CreateClientError::ImageProcessingFailed(msg) => {
            warn!(error = %msg, "Client image could not be processed");
            ApiResponse::server_error("IMAGE_PROCESSING_FAILED", "Image processing failed")
        }
        CreateClientError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to store client");
            ApiResponse::internal_error()
        }
    }
}
