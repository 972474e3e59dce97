use async_trait::async_trait;

use crate::modules::client::application::ports::outgoing::ClientResult;
use crate::shared::validation::required_text;

#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    name: String,
    designation: String,
    description: String,
    image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientCommandError {
    #[error("name is required")]
    MissingName,

    #[error("designation is required")]
    MissingDesignation,

    #[error("description is required")]
    MissingDescription,
}

impl CreateClientCommand {
    pub fn new(
        name: Option<String>,
        designation: Option<String>,
        description: Option<String>,
        image: Option<Vec<u8>>,
    ) -> Result<Self, ClientCommandError> {
        let name = required_text(name).ok_or(ClientCommandError::MissingName)?;
        let designation =
            required_text(designation).ok_or(ClientCommandError::MissingDesignation)?;
        let description =
            required_text(description).ok_or(ClientCommandError::MissingDescription)?;

        Ok(Self {
            name,
            designation,
            description,
            image: image.filter(|bytes| !bytes.is_empty()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn into_parts(self) -> (String, String, String, Option<Vec<u8>>) {
        (self.name, self.designation, self.description, self.image)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateClientError {
    #[error("Image processing failed: {0}")]
    ImageProcessingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateClientUseCase: Send + Sync {
    async fn execute(&self, command: CreateClientCommand)
        -> Result<ClientResult, CreateClientError>;
}
