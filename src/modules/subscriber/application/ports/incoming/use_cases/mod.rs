mod get_subscribers;
mod subscribe;

pub use get_subscribers::{GetSubscribersError, GetSubscribersUseCase};
pub use subscribe::{
    SubscribeCommand, SubscribeCommandError, SubscribeError, SubscribeOutcome, SubscribeUseCase,
};
