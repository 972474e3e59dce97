use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubscriberResult {
    pub id: Uuid,
    #[schema(example = "reader@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscriberRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Inserts the address unless it is already stored, as one atomic statement.
    ///
    /// Returns `Ok(None)` when the address was already present.
    async fn subscribe_if_absent(
        &self,
        email: String,
    ) -> Result<Option<SubscriberResult>, SubscriberRepositoryError>;
}
