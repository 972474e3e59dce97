use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError, ContactResult, CreateContactData,
};

use super::sea_orm_entity::{ActiveModel as ContactActiveModel, Model as ContactModel};

#[derive(Debug, Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        let active = ContactActiveModel {
            id: Set(Uuid::new_v4()),
            full_name: Set(data.full_name),
            email: Set(data.email),
            phone: Set(data.phone),
            city: Set(data.city),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: ContactModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ContactRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_contact_result())
    }
}
