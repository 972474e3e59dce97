// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Error envelope. Successful responses carry the bare record or list.
#[derive(Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Ok().json(data)
    }

    pub fn created<T: Serialize>(data: T) -> HttpResponse {
        HttpResponse::Created().json(data)
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse {
            success: false,
            error: ApiError {
                code: code.to_string(),
                message: message.to_string(),
            },
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn payload_too_large(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::PAYLOAD_TOO_LARGE, code, message)
    }

    pub fn server_error(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::server_error("INTERNAL_ERROR", "An unexpected error occurred")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_json(resp: HttpResponse) -> serde_json::Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn success_body_is_the_bare_payload() {
        let resp = ApiResponse::success(vec!["a", "b"]);

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, serde_json::json!(["a", "b"]));
    }

    #[actix_web::test]
    async fn created_body_is_the_bare_record() {
        let resp = ApiResponse::created(serde_json::json!({ "id": 1 }));

        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(body_json(resp).await, serde_json::json!({ "id": 1 }));
    }

    #[actix_web::test]
    async fn errors_keep_the_envelope() {
        let resp = ApiResponse::bad_request("MISSING_FIELD", "name is required");

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(resp).await,
            serde_json::json!({
                "success": false,
                "error": { "code": "MISSING_FIELD", "message": "name is required" }
            })
        );
    }
}
