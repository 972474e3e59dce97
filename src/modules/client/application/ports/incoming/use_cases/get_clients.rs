use async_trait::async_trait;

use crate::modules::client::application::ports::outgoing::ClientResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetClientsError {
    #[error("Failed to fetch clients: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetClientsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ClientResult>, GetClientsError>;
}
