use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::shared::validation::required_text;

//
// ──────────────────────────────────────────────────────────
// Create Project Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct CreateProjectCommand {
    name: String,
    description: String,
    image: Option<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectCommandError {
    #[error("name is required")]
    MissingName,

    #[error("description is required")]
    MissingDescription,
}

impl CreateProjectCommand {
    pub fn new(
        name: Option<String>,
        description: Option<String>,
        image: Option<Vec<u8>>,
    ) -> Result<Self, ProjectCommandError> {
        let name = required_text(name).ok_or(ProjectCommandError::MissingName)?;
        let description =
            required_text(description).ok_or(ProjectCommandError::MissingDescription)?;

        Ok(Self {
            name,
            description,
            image: image.filter(|bytes| !bytes.is_empty()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Splits the command into its text fields and the raw image bytes.
    pub fn into_parts(self) -> (String, String, Option<Vec<u8>>) {
        (self.name, self.description, self.image)
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateProjectError {
    #[error("Image processing failed: {0}")]
    ImageProcessingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError>;
}
