use std::sync::Arc;

use crate::modules::subscriber::application::ports::incoming::use_cases::{
    GetSubscribersUseCase, SubscribeUseCase,
};

#[derive(Clone)]
pub struct SubscriberUseCases {
    pub subscribe: Arc<dyn SubscribeUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSubscribersUseCase + Send + Sync>,
}
