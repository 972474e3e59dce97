use async_trait::async_trait;
use tracing::info;

use crate::modules::subscriber::application::ports::{
    incoming::use_cases::{SubscribeCommand, SubscribeError, SubscribeOutcome, SubscribeUseCase},
    outgoing::{SubscriberQuery, SubscriberRepository},
};

#[derive(Debug, Clone)]
pub struct SubscribeService<R, Q>
where
    R: SubscriberRepository + Send + Sync,
    Q: SubscriberQuery + Send + Sync,
{
    repository: R,
    query: Q,
}

impl<R, Q> SubscribeService<R, Q>
where
    R: SubscriberRepository + Send + Sync,
    Q: SubscriberQuery + Send + Sync,
{
    pub fn new(repository: R, query: Q) -> Self {
        Self { repository, query }
    }
}

#[async_trait]
impl<R, Q> SubscribeUseCase for SubscribeService<R, Q>
where
    R: SubscriberRepository + Send + Sync,
    Q: SubscriberQuery + Send + Sync,
{
    async fn execute(
        &self,
        command: SubscribeCommand,
    ) -> Result<SubscribeOutcome, SubscribeError> {
        let inserted = self
            .repository
            .subscribe_if_absent(command.email().to_string())
            .await
            .map_err(|e| SubscribeError::RepositoryError(e.to_string()))?;

        if let Some(subscriber) = inserted {
            info!(subscriber_id = %subscriber.id, "New subscriber");
            return Ok(SubscribeOutcome::Created(subscriber));
        }

        // Conflict: the address is already stored, report the existing record
        let existing = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| SubscribeError::QueryError(e.to_string()))?
            .ok_or_else(|| {
                SubscribeError::QueryError("conflicting subscriber not found".to_string())
            })?;

        info!(subscriber_id = %existing.id, "Duplicate subscription ignored");

        Ok(SubscribeOutcome::AlreadySubscribed(existing))
    }
}
