mod create_client;
mod get_clients;

pub use create_client::{create_client_handler, __path_create_client_handler, CreateClientForm};
pub use get_clients::{get_clients_handler, __path_get_clients_handler};
