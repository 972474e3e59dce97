use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetContactsError {
    #[error("Failed to fetch contacts: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetContactsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ContactResult>, GetContactsError>;
}
