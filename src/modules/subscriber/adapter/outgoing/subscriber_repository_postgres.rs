use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::subscriber::application::ports::outgoing::{
    SubscriberRepository, SubscriberRepositoryError, SubscriberResult,
};

use super::sea_orm_entity::{
    ActiveModel as SubscriberActiveModel, Column as SubscriberColumn,
    Entity as SubscriberEntity,
};

#[derive(Debug, Clone)]
pub struct SubscriberRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SubscriberRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SubscriberRepository for SubscriberRepositoryPostgres {
    async fn subscribe_if_absent(
        &self,
        email: String,
    ) -> Result<Option<SubscriberResult>, SubscriberRepositoryError> {
        let active = SubscriberActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email),
            created_at: Set(Utc::now().fixed_offset()),
        };

        // INSERT ... ON CONFLICT (email) DO NOTHING RETURNING *
        let result = SubscriberEntity::insert(active)
            .on_conflict(
                OnConflict::column(SubscriberColumn::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await;

        match result {
            Ok(model) => Ok(Some(model.to_subscriber_result())),
            // No row returned: the unique index swallowed the insert
            Err(DbErr::RecordNotInserted) | Err(DbErr::RecordNotFound(_)) => Ok(None),
            Err(e) => Err(SubscriberRepositoryError::DatabaseError(e.to_string())),
        }
    }
}
