use actix_multipart::Multipart;
use actix_web::{post, web, HttpResponse, Responder};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    modules::project::application::ports::{
        incoming::use_cases::{CreateProjectCommand, CreateProjectError, ProjectCommandError},
        outgoing::ProjectResult,
    },
    shared::api::{read_multipart_form, ApiResponse},
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// multipart/form-data body for creating a project
#[derive(Debug, ToSchema)]
pub struct CreateProjectForm {
    #[schema(example = "Harbour View Residences")]
    pub name: String,

    #[schema(example = "Twelve waterfront homes with shared gardens")]
    pub description: String,

    /// Optional image, stored as a 450x350 JPEG
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Create a project
///
/// Accepts `name`, `description` and an optional `image` file. The image is
/// centre-cropped to 450x350 and re-encoded as JPEG before the record is stored.
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    tag = "projects",
    request_body(content = CreateProjectForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Project created", body = ProjectResult),
        (status = 400, description = "Missing field or malformed form", body = ErrorResponse),
        (status = 413, description = "Image exceeds the upload limit", body = ErrorResponse),
        (status = 500, description = "Image processing or storage failure", body = ErrorResponse)
    )
)]
#[post("/api/admin/projects")]
pub async fn create_project_handler(
    data: web::Data<AppState>,
    payload: Multipart,
) -> impl Responder {
    let mut form = match read_multipart_form(payload, "image", data.max_upload_bytes).await {
        Ok(form) => form,
        Err(err) => {
            warn!(error = %err, "Rejected project form");
            return err.to_response();
        }
    };

    let command = match CreateProjectCommand::new(
        form.take_text("name"),
        form.take_text("description"),
        form.take_file(),
    ) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.project.create.execute(command).await {
        Ok(project) => ApiResponse::created(project),
        Err(err) => map_create_project_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: ProjectCommandError) -> HttpResponse {
    ApiResponse::bad_request("MISSING_FIELD", &err.to_string())
}

fn map_create_project_error(err: CreateProjectError) -> HttpResponse {
    match err {
        CreateProjectError::ImageProcessingFailed(msg) => {
            warn!(error = %msg, "Project image could not be processed");
            ApiResponse::server_error("IMAGE_PROCESSING_FAILED", "Image processing failed")
        }
        CreateProjectError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to store project");
            ApiResponse::internal_error()
        }
    }
}
