use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::subscriber::application::ports::outgoing::SubscriberResult,
    shared::api::ApiResponse,
    AppState,
};

/// List newsletter subscribers, newest first
#[utoipa::path(
    get,
    path = "/api/admin/subscribers",
    tag = "subscribers",
    responses(
        (status = 200, description = "All subscribers", body = Vec<SubscriberResult>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/admin/subscribers")]
pub async fn get_subscribers_handler(data: web::Data<AppState>) -> impl Responder {
    match data.subscriber.get_list.execute().await {
        Ok(subscribers) => ApiResponse::success(subscribers),
        Err(err) => {
            error!(error = %err, "Failed to list subscribers");
            ApiResponse::internal_error()
        }
    }
}
