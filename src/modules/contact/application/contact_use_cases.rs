use std::sync::Arc;

use crate::modules::contact::application::ports::incoming::use_cases::{
    CreateContactUseCase, GetContactsUseCase,
};

#[derive(Clone)]
pub struct ContactUseCases {
    pub create: Arc<dyn CreateContactUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetContactsUseCase + Send + Sync>,
}
