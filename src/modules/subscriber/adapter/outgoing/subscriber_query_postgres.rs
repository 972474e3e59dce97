use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use crate::modules::subscriber::application::ports::outgoing::{
    SubscriberQuery, SubscriberQueryError, SubscriberResult,
};

use super::sea_orm_entity::{
    Column as SubscriberColumn, Entity as SubscriberEntity, Model as SubscriberModel,
};

#[derive(Debug, Clone)]
pub struct SubscriberQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriberQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriberQuery for SubscriberQueryPostgres {
    async fn list_subscribers(&self) -> Result<Vec<SubscriberResult>, SubscriberQueryError> {
        let models: Vec<SubscriberModel> = SubscriberEntity::find()
            .order_by_desc(SubscriberColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| SubscriberQueryError::DatabaseError(e.to_string()))?;

        Ok(models
            .iter()
            .map(SubscriberModel::to_subscriber_result)
            .collect())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberResult>, SubscriberQueryError> {
        let model = SubscriberEntity::find()
            .filter(SubscriberColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| SubscriberQueryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_subscriber_result()))
    }
}
