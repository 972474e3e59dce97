use async_trait::async_trait;

use super::contact_repository::ContactResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ContactQuery: Send + Sync {
    /// Ordered by creation time, newest first.
    async fn list_contacts(&self) -> Result<Vec<ContactResult>, ContactQueryError>;
}
