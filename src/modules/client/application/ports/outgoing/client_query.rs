use async_trait::async_trait;

use super::client_repository::ClientResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ClientQuery: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<ClientResult>, ClientQueryError>;
}
