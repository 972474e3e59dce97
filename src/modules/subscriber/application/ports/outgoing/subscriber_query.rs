use async_trait::async_trait;

use super::subscriber_repository::SubscriberResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscriberQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SubscriberQuery: Send + Sync {
    async fn list_subscribers(&self) -> Result<Vec<SubscriberResult>, SubscriberQueryError>;

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberResult>, SubscriberQueryError>;
}
