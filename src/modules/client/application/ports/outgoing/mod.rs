pub mod client_query;
pub mod client_repository;

pub use client_query::{ClientQuery, ClientQueryError};
pub use client_repository::{
    ClientRepository, ClientRepositoryError, ClientResult, CreateClientData,
};
