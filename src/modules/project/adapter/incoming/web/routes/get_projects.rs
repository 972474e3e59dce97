use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::project::application::ports::outgoing::ProjectResult,
    shared::api::ApiResponse,
    AppState,
};

/// List projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "All projects", body = Vec<ProjectResult>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(err) => {
            error!(error = %err, "Failed to list projects");
            ApiResponse::internal_error()
        }
    }
}
