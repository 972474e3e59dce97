use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateClientData {
    pub name: String,
    pub designation: String,
    pub description: String,
    pub image_url: Option<String>,
}

/// A client testimonial as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientResult {
    pub id: Uuid,
    #[schema(example = "Maya Okafor")]
    pub name: String,
    #[schema(example = "Operations Lead, Brightline Logistics")]
    pub designation: String,
    pub description: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn create_client(
        &self,
        data: CreateClientData,
    ) -> Result<ClientResult, ClientRepositoryError>;
}
