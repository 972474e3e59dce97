use async_trait::async_trait;

use super::project_repository::ProjectResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// All projects, newest first.
    async fn list_projects(&self) -> Result<Vec<ProjectResult>, ProjectQueryError>;
}
