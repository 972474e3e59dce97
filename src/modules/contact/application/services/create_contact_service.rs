use async_trait::async_trait;
use tracing::info;

use crate::modules::contact::application::ports::{
    incoming::use_cases::{CreateContactCommand, CreateContactError, CreateContactUseCase},
    outgoing::{ContactRepository, ContactResult, CreateContactData},
};

#[derive(Debug, Clone)]
pub struct CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    repository: R,
}

impl<R> CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateContactUseCase for CreateContactService<R>
where
    R: ContactRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateContactCommand,
    ) -> Result<ContactResult, CreateContactError> {
        let data = CreateContactData {
            full_name: command.full_name().to_string(),
            email: command.email().to_string(),
            phone: command.phone().to_string(),
            city: command.city().to_string(),
        };

        let contact = self
            .repository
            .create_contact(data)
            .await
            .map_err(|e| CreateContactError::RepositoryError(e.to_string()))?;

        info!(contact_id = %contact.id, "Contact submission stored");

        Ok(contact)
    }
}
