use async_trait::async_trait;

use crate::modules::client::application::ports::{
    incoming::use_cases::{GetClientsError, GetClientsUseCase},
    outgoing::{ClientQuery, ClientResult},
};

#[derive(Debug, Clone)]
pub struct GetClientsService<Q>
where
    Q: ClientQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetClientsService<Q>
where
    Q: ClientQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetClientsUseCase for GetClientsService<Q>
where
    Q: ClientQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ClientResult>, GetClientsError> {
        self.query
            .list_clients()
            .await
            .map_err(|e| GetClientsError::QueryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::client::application::ports::outgoing::ClientQueryError;

    struct StubClientQuery(Result<Vec<ClientResult>, ClientQueryError>);

    #[async_trait]
    impl ClientQuery for StubClientQuery {
        async fn list_clients(&self) -> Result<Vec<ClientResult>, ClientQueryError> {
            self.0.clone()
        }
    }

    #[tokio::test]
    async fn passes_clients_through() {
        let client = ClientResult {
            id: Uuid::new_v4(),
            name: "Maya Okafor".to_string(),
            designation: "CTO".to_string(),
            description: "Great partner".to_string(),
            image_url: None,
            created_at: Utc::now(),
        };
        let service = GetClientsService::new(StubClientQuery(Ok(vec![client.clone()])));

        assert_eq!(service.execute().await.unwrap(), vec![client]);
    }

    #[tokio::test]
    async fn query_error_becomes_query_failed() {
        let service = GetClientsService::new(StubClientQuery(Err(
            ClientQueryError::DatabaseError("pool closed".to_string()),
        )));

        assert!(matches!(
            service.execute().await,
            Err(GetClientsError::QueryFailed(_))
        ));
    }
}
