use crate::modules::client::application::ports::outgoing::ClientResult;
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub designation: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_client_result(&self) -> ClientResult {
        ClientResult {
            id: self.id,
            name: self.name.clone(),
            designation: self.designation.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
