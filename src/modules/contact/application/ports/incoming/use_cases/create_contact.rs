use async_trait::async_trait;

use crate::modules::contact::application::ports::outgoing::ContactResult;
use crate::shared::validation::{is_valid_email, required_text};

//
// ──────────────────────────────────────────────────────────
// Create Contact Command
// ──────────────────────────────────────────────────────────
//

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateContactCommand {
    full_name: String,
    email: String,
    phone: String,
    city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactCommandError {
    /// Carries the wire name of the first missing field
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("email is not a valid address")]
    InvalidEmail,
}

impl CreateContactCommand {
    pub fn new(
        full_name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        city: Option<String>,
    ) -> Result<Self, ContactCommandError> {
        let full_name =
            required_text(full_name).ok_or(ContactCommandError::MissingField("fullName"))?;
        let email = required_text(email).ok_or(ContactCommandError::MissingField("email"))?;
        let phone = required_text(phone).ok_or(ContactCommandError::MissingField("phone"))?;
        let city = required_text(city).ok_or(ContactCommandError::MissingField("city"))?;

        if !is_valid_email(&email) {
            return Err(ContactCommandError::InvalidEmail);
        }

        Ok(Self {
            full_name,
            email,
            phone,
            city,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateContactError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateContactUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateContactCommand,
    ) -> Result<ContactResult, CreateContactError>;
}
