use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder, Select};
use std::sync::Arc;

use crate::modules::client::application::ports::outgoing::{
    ClientQuery, ClientQueryError, ClientResult,
};

use super::sea_orm_entity::{Column as ClientColumn, Entity as ClientEntity, Model as ClientModel};

#[derive(Debug, Clone)]
pub struct ClientQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ClientQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Newest first. Ids are random, so the secondary key only makes rows
/// created in the same instant come back in a stable order.
fn newest_first() -> Select<ClientEntity> {
    ClientEntity::find()
        .order_by_desc(ClientColumn::CreatedAt)
        .order_by_desc(ClientColumn::Id)
}

#[async_trait]
impl ClientQuery for ClientQueryPostgres {
    async fn list_clients(&self) -> Result<Vec<ClientResult>, ClientQueryError> {
        let models: Vec<ClientModel> = newest_first()
            .all(&*self.db)
            .await
            .map_err(|e| ClientQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(ClientModel::to_client_result).collect())
    }
}
