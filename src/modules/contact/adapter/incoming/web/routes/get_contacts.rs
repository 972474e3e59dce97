use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::contact::application::ports::outgoing::ContactResult,
    shared::api::ApiResponse,
    AppState,
};

/// List contact submissions, newest first
#[utoipa::path(
    get,
    path = "/api/admin/contacts",
    tag = "contacts",
    responses(
        (status = 200, description = "All contact submissions", body = Vec<ContactResult>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/admin/contacts")]
pub async fn get_contacts_handler(data: web::Data<AppState>) -> impl Responder {
    match data.contact.get_list.execute().await {
        Ok(contacts) => ApiResponse::success(contacts),
        Err(err) => {
            error!(error = %err, "Failed to list contacts");
            ApiResponse::internal_error()
        }
    }
}
