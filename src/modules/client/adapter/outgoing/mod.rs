mod client_query_postgres;
mod client_repository_postgres;
pub mod sea_orm_entity;

pub use client_query_postgres::ClientQueryPostgres;
pub use client_repository_postgres::ClientRepositoryPostgres;
