mod get_subscribers_service;
mod subscribe_service;

pub use get_subscribers_service::GetSubscribersService;
pub use subscribe_service::SubscribeService;
