use async_trait::async_trait;

use crate::modules::contact::application::ports::{
    incoming::use_cases::{GetContactsError, GetContactsUseCase},
    outgoing::{ContactQuery, ContactResult},
};

#[derive(Debug, Clone)]
pub struct GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetContactsUseCase for GetContactsService<Q>
where
    Q: ContactQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ContactResult>, GetContactsError> {
        self.query
            .list_contacts()
            .await
            .map_err(|e| GetContactsError::QueryFailed(e.to_string()))
    }
}
