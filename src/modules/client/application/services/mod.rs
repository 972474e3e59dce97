mod create_client_service;
mod get_clients_service;

pub use create_client_service::CreateClientService;
pub use get_clients_service::GetClientsService;
