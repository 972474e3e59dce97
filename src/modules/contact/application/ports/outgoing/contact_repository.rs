// src/modules/contact/application/ports/outgoing/contact_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContactData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResult {
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub full_name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[schema(example = "555-0100")]
    pub phone: String,
    #[schema(example = "Springfield")]
    pub city: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<ContactResult, ContactRepositoryError>;
}
