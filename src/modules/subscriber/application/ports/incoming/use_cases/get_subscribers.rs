use async_trait::async_trait;

use crate::modules::subscriber::application::ports::outgoing::SubscriberResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSubscribersError {
    #[error("Failed to fetch subscribers: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSubscribersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SubscriberResult>, GetSubscribersError>;
}
