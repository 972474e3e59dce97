mod create_client;
mod get_clients;

pub use create_client::{
    ClientCommandError, CreateClientCommand, CreateClientError, CreateClientUseCase,
};
pub use get_clients::{GetClientsError, GetClientsUseCase};
