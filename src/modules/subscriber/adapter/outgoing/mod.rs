pub mod sea_orm_entity;
mod subscriber_query_postgres;
mod subscriber_repository_postgres;

pub use subscriber_query_postgres::SubscriberQueryPostgres;
pub use subscriber_repository_postgres::SubscriberRepositoryPostgres;
