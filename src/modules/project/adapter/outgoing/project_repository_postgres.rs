use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

use super::sea_orm_entity::{ActiveModel as ProjectActiveModel, Model as ProjectModel};

#[derive(Debug, Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let active = ProjectActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            description: Set(data.description),
            image_url: Set(data.image_url),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: ProjectModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ProjectRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_project_result())
    }
}
