use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::client::application::ports::outgoing::{
    ClientRepository, ClientRepositoryError, ClientResult, CreateClientData,
};

use super::sea_orm_entity::{ActiveModel as ClientActiveModel, Model as ClientModel};

#[derive(Debug, Clone)]
pub struct ClientRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ClientRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for ClientRepositoryPostgres {
    async fn create_client(
        &self,
        data: CreateClientData,
    ) -> Result<ClientResult, ClientRepositoryError> {
        let active = ClientActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            designation: Set(data.designation),
            description: Set(data.description),
            image_url: Set(data.image_url),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted: ClientModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| ClientRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_client_result())
    }
}
