use async_trait::async_trait;

use crate::modules::subscriber::application::ports::outgoing::SubscriberResult;
use crate::shared::validation::{normalize_email, required_text};

//
// ──────────────────────────────────────────────────────────
// Subscribe Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscribeCommand {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscribeCommandError {
    #[error("email is required")]
    MissingEmail,

    #[error("email is not a valid address")]
    InvalidEmail,
}

impl SubscribeCommand {
    /// Emails are stored trimmed and lower-cased so `A@x.com` and `a@x.com` collide.
    pub fn new(email: Option<String>) -> Result<Self, SubscribeCommandError> {
        let raw = required_text(email).ok_or(SubscribeCommandError::MissingEmail)?;
        let email = normalize_email(&raw).ok_or(SubscribeCommandError::InvalidEmail)?;

        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub enum SubscribeOutcome {
    Created(SubscriberResult),
    AlreadySubscribed(SubscriberResult),
}

impl SubscribeOutcome {
    pub fn subscriber(&self) -> &SubscriberResult {
        match self {
            SubscribeOutcome::Created(s) | SubscribeOutcome::AlreadySubscribed(s) => s,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscribeError {
    #[error("Repository error: {0}")]
    RepositoryError(String),

    #[error("Query error: {0}")]
    QueryError(String),
}

#[async_trait]
pub trait SubscribeUseCase: Send + Sync {
    async fn execute(&self, command: SubscribeCommand)
        -> Result<SubscribeOutcome, SubscribeError>;
}
