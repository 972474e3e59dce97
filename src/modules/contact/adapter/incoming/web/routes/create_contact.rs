use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    modules::contact::application::ports::{
        incoming::use_cases::{ContactCommandError, CreateContactCommand, CreateContactError},
        outgoing::ContactResult,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Fields are optional at the serde level so a missing field produces
/// `MISSING_FIELD` instead of a generic deserialisation error.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
    #[schema(example = "Springfield")]
    pub city: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contacts",
    request_body = CreateContactRequest,
    responses(
        (
            status = 201,
            description = "Contact stored",
            body = ContactResult
        ),
        (
            status = 400,
            description = "Missing field or invalid email",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "MISSING_FIELD", "message": "city is required" }
            })
        ),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/contact")]
pub async fn create_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<CreateContactRequest>,
) -> impl Responder {
    let req = payload.into_inner();

    // 1️⃣ Validate
    let command = match CreateContactCommand::new(req.full_name, req.email, req.phone, req.city) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    // 2️⃣ Persist
    match data.contact.create.execute(command).await {
        Ok(contact) => ApiResponse::created(contact),
        Err(err) => map_create_contact_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: ContactCommandError) -> HttpResponse {
    warn!(error = %err, "Rejected contact submission");

    match err {
        ContactCommandError::MissingField(_) => {
            ApiResponse::bad_request("MISSING_FIELD", &err.to_string())
        }
        ContactCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
    }
}

fn map_create_contact_error(err: CreateContactError) -> HttpResponse {
    error!(error = %err, "Failed to store contact");
    ApiResponse::internal_error()
}
