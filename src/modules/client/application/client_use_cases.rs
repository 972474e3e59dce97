use std::sync::Arc;

use crate::modules::client::application::ports::incoming::use_cases::{
    CreateClientUseCase, GetClientsUseCase,
};

#[derive(Clone)]
pub struct ClientUseCases {
    pub create: Arc<dyn CreateClientUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetClientsUseCase + Send + Sync>,
}
