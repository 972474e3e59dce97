use actix_web::{get, web, Responder};
use tracing::error;

use crate::{
    api::schemas::ErrorResponse,
    modules::client::application::ports::outgoing::ClientResult,
    shared::api::ApiResponse,
    AppState,
};

/// List clients, newest first
#[utoipa::path(
    get,
    path = "/api/clients",
    tag = "clients",
    responses(
        (status = 200, description = "All clients", body = Vec<ClientResult>),
        (status = 500, description = "Store unavailable", body = ErrorResponse)
    )
)]
#[get("/api/clients")]
pub async fn get_clients_handler(data: web::Data<AppState>) -> impl Responder {
    match data.client.get_list.execute().await {
        Ok(clients) => ApiResponse::success(clients),
        Err(err) => {
            error!(error = %err, "Failed to list clients");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, stubs::StubGetClientsUseCase,
    };

    #[actix_web::test]
    async fn get_clients_returns_envelope() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(App::new().app_data(state).service(get_clients_handler)).await;

        let req = test::TestRequest::get().uri("/api/clients").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert!(json.is_array());
    }

    #[actix_web::test]
    async fn get_clients_failure_returns_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_get_clients(StubGetClientsUseCase::failure("pool closed"))
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_clients_handler)).await;

        let req = test::TestRequest::get().uri("/api/clients").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
