use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::project::application::ports::outgoing::{
    ProjectQuery, ProjectQueryError, ProjectResult,
};

use super::sea_orm_entity::{
    Column as ProjectColumn, Entity as ProjectEntity, Model as ProjectModel,
};

#[derive(Debug, Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Newest first. Ids are random, so the secondary key only makes rows
/// created in the same instant come back in a stable order.
fn newest_first() -> Select<ProjectEntity> {
    ProjectEntity::find()
        .order_by_desc(ProjectColumn::CreatedAt)
        .order_by_desc(ProjectColumn::Id)
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(&self) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let models: Vec<ProjectModel> = newest_first()
            .all(&*self.db)
            .await
            .map_err(|e| ProjectQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ProjectModel::to_project_result).collect())
    }
}
