use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::ErrorResponse,
    modules::subscriber::application::ports::{
        incoming::use_cases::{
            SubscribeCommand, SubscribeCommandError, SubscribeError, SubscribeOutcome,
        },
        outgoing::SubscriberResult,
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, ToSchema)]
pub struct SubscribeRequest {
    #[schema(example = "reader@example.com")]
    pub email: Option<String>,
}

/// Body returned when the address is already stored
#[derive(Debug, Serialize, ToSchema)]
pub struct SubscribeResponse {
    #[schema(example = "Already subscribed")]
    pub message: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Subscribe an email address to the newsletter
///
/// A new address returns the stored subscriber with 201. Submitting an
/// address that is already stored is not an error and returns 200 with a
/// message instead.
#[utoipa::path(
    post,
    path = "/api/subscribe",
    tag = "subscribers",
    request_body = SubscribeRequest,
    responses(
        (status = 201, description = "New subscriber", body = SubscriberResult),
        (
            status = 200,
            description = "Address was already subscribed",
            body = SubscribeResponse,
            example = json!({ "message": "Already subscribed" })
        ),
        (status = 400, description = "Missing or invalid email", body = ErrorResponse),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[post("/api/subscribe")]
pub async fn subscribe_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubscribeRequest>,
) -> impl Responder {
    let command = match SubscribeCommand::new(payload.into_inner().email) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.subscriber.subscribe.execute(command).await {
        Ok(SubscribeOutcome::Created(subscriber)) => ApiResponse::created(subscriber),
        Ok(SubscribeOutcome::AlreadySubscribed(subscriber)) => {
            info!(subscriber_id = %subscriber.id, "Address already subscribed");
            ApiResponse::success(SubscribeResponse {
                message: "Already subscribed".to_string(),
            })
        }
        Err(err) => map_subscribe_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_command_error(err: SubscribeCommandError) -> HttpResponse {
    warn!(error = %err, "Rejected subscription");

    match err {
        SubscribeCommandError::MissingEmail => {
            ApiResponse::bad_request("MISSING_FIELD", "email is required")
        }
        SubscribeCommandError::InvalidEmail => {
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
    }
}

fn map_subscribe_error(err: SubscribeError) -> HttpResponse {
    error!(error = %err, "Subscription failed");
    ApiResponse::internal_error()
}
