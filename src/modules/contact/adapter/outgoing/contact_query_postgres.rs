use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactResult,
};

use super::sea_orm_entity::{
    Column as ContactColumn, Entity as ContactEntity, Model as ContactModel,
};

#[derive(Debug, Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn list_contacts(&self) -> Result<Vec<ContactResult>, ContactQueryError> {
        let models: Vec<ContactModel> = ContactEntity::find()
            .order_by_desc(ContactColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| ContactQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ContactModel::to_contact_result).collect())
    }
}
