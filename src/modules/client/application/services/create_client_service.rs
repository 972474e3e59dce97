use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::client::application::ports::{
    incoming::use_cases::{CreateClientCommand, CreateClientError, CreateClientUseCase},
    outgoing::{ClientRepository, ClientResult, CreateClientData},
};
use crate::modules::media::application::{
    domain::entities::ImageLabel, ports::outgoing::ImageProcessor,
};

#[derive(Clone)]
pub struct CreateClientService<R>
where
    R: ClientRepository + Send + Sync,
{
    repository: R,
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
}

impl<R> CreateClientService<R>
where
    R: ClientRepository + Send + Sync,
{
    pub fn new(repository: R, image_processor: Arc<dyn ImageProcessor + Send + Sync>) -> Self {
        Self {
            repository,
            image_processor,
        }
    }
}

#[async_trait]
impl<R> CreateClientUseCase for CreateClientService<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateClientCommand,
    ) -> Result<ClientResult, CreateClientError> {
        let (name, designation, description, image) = command.into_parts();

        let image_url = match image {
            Some(bytes) => Some(
                self.image_processor
                    .save_cropped(bytes, ImageLabel::Client)
                    .await
                    .map_err(|e| CreateClientError::ImageProcessingFailed(e.to_string()))?,
            ),
            None => None,
        };

        let data = CreateClientData {
            name,
            designation,
            description,
            image_url: image_url.clone(),
        };

        let client = match self.repository.create_client(data).await {
            Ok(client) => client,
            Err(e) => {
                if let Some(url) = image_url.as_deref() {
                    self.image_processor.discard(url).await;
                }
                return Err(CreateClientError::RepositoryError(e.to_string()));
            }
        };

        info!(client_id = %client.id, "Client created");

        Ok(client)
    }
}
