use async_trait::async_trait;

use crate::modules::project::application::ports::{
    incoming::use_cases::{GetProjectsError, GetProjectsUseCase},
    outgoing::{ProjectQuery, ProjectResult},
};

#[derive(Debug, Clone)]
pub struct GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        self.query
            .list_projects()
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))
    }
}
