use async_trait::async_trait;

use crate::modules::subscriber::application::ports::{
    incoming::use_cases::{GetSubscribersError, GetSubscribersUseCase},
    outgoing::{SubscriberQuery, SubscriberResult},
};

#[derive(Debug, Clone)]
pub struct GetSubscribersService<Q>
where
    Q: SubscriberQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSubscribersService<Q>
where
    Q: SubscriberQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSubscribersUseCase for GetSubscribersService<Q>
where
    Q: SubscriberQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SubscriberResult>, GetSubscribersError> {
        self.query
            .list_subscribers()
            .await
            .map_err(|e| GetSubscribersError::QueryFailed(e.to_string()))
    }
}
