pub mod subscriber_query;
pub mod subscriber_repository;

pub use subscriber_query::{SubscriberQuery, SubscriberQueryError};
pub use subscriber_repository::{
    SubscriberRepository, SubscriberRepositoryError, SubscriberResult,
};
