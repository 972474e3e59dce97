mod get_subscribers;
mod subscribe;

pub use get_subscribers::{get_subscribers_handler, __path_get_subscribers_handler};
pub use subscribe::{subscribe_handler, __path_subscribe_handler, SubscribeRequest, SubscribeResponse};
