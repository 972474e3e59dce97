use async_trait::async_trait;

use crate::modules::client::application::ports::{
    incoming::use_cases::{
        CreateClientCommand, CreateClientError, CreateClientUseCase, GetClientsError,
        GetClientsUseCase,
    },
    outgoing::ClientResult,
};
use crate::modules::contact::application::ports::{
    incoming::use_cases::{
        CreateContactCommand, CreateContactError, CreateContactUseCase, GetContactsError,
        GetContactsUseCase,
    },
    outgoing::ContactResult,
};
use crate::modules::project::application::ports::{
    incoming::use_cases::{
        CreateProjectCommand, CreateProjectError, CreateProjectUseCase, GetProjectsError,
        GetProjectsUseCase,
    },
    outgoing::ProjectResult,
};
use crate::modules::subscriber::application::ports::{
    incoming::use_cases::{
        GetSubscribersError, GetSubscribersUseCase, SubscribeCommand, SubscribeError,
        SubscribeOutcome, SubscribeUseCase,
    },
    outgoing::SubscriberResult,
};

// ============================================================
// Project
// ============================================================

#[derive(Clone)]
pub struct StubCreateProjectUseCase {
    result: Result<ProjectResult, CreateProjectError>,
}

impl StubCreateProjectUseCase {
    pub fn success(project: ProjectResult) -> Self {
        Self {
            result: Ok(project),
        }
    }

    pub fn image_failed(msg: &str) -> Self {
        Self {
            result: Err(CreateProjectError::ImageProcessingFailed(msg.to_string())),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateProjectError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetProjectsUseCase {
    result: Result<Vec<ProjectResult>, GetProjectsError>,
}

impl StubGetProjectsUseCase {
    pub fn success(projects: Vec<ProjectResult>) -> Self {
        Self {
            result: Ok(projects),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetProjectsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        self.result.clone()
    }
}

// ============================================================
// Client
// ============================================================

#[derive(Clone)]
pub struct StubCreateClientUseCase {
    result: Result<ClientResult, CreateClientError>,
}

impl StubCreateClientUseCase {
    pub fn success(client: ClientResult) -> Self {
        Self { result: Ok(client) }
    }

    pub fn image_failed(msg: &str) -> Self {
        Self {
            result: Err(CreateClientError::ImageProcessingFailed(msg.to_string())),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateClientError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateClientUseCase for StubCreateClientUseCase {
    async fn execute(
        &self,
        _command: CreateClientCommand,
    ) -> Result<ClientResult, CreateClientError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetClientsUseCase {
    result: Result<Vec<ClientResult>, GetClientsError>,
}

impl StubGetClientsUseCase {
    pub fn success(clients: Vec<ClientResult>) -> Self {
        Self {
            result: Ok(clients),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetClientsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetClientsUseCase for StubGetClientsUseCase {
    async fn execute(&self) -> Result<Vec<ClientResult>, GetClientsError> {
        self.result.clone()
    }
}

// ============================================================
// Contact
// ============================================================

#[derive(Clone)]
pub struct StubCreateContactUseCase {
    result: Result<ContactResult, CreateContactError>,
}

impl StubCreateContactUseCase {
    pub fn success(contact: ContactResult) -> Self {
        Self {
            result: Ok(contact),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateContactError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateContactUseCase for StubCreateContactUseCase {
    async fn execute(
        &self,
        _command: CreateContactCommand,
    ) -> Result<ContactResult, CreateContactError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetContactsUseCase {
    result: Result<Vec<ContactResult>, GetContactsError>,
}

impl StubGetContactsUseCase {
    pub fn success(contacts: Vec<ContactResult>) -> Self {
        Self {
            result: Ok(contacts),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetContactsError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetContactsUseCase for StubGetContactsUseCase {
    async fn execute(&self) -> Result<Vec<ContactResult>, GetContactsError> {
        self.result.clone()
    }
}

// ============================================================
// Subscriber
// ============================================================

#[derive(Clone)]
pub struct StubSubscribeUseCase {
    result: Result<SubscribeOutcome, SubscribeError>,
}

impl StubSubscribeUseCase {
    pub fn created(subscriber: SubscriberResult) -> Self {
        Self {
            result: Ok(SubscribeOutcome::Created(subscriber)),
        }
    }

    pub fn already_subscribed(subscriber: SubscriberResult) -> Self {
        Self {
            result: Ok(SubscribeOutcome::AlreadySubscribed(subscriber)),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(SubscribeError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl SubscribeUseCase for StubSubscribeUseCase {
    async fn execute(
        &self,
        _command: SubscribeCommand,
    ) -> Result<SubscribeOutcome, SubscribeError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetSubscribersUseCase {
    result: Result<Vec<SubscriberResult>, GetSubscribersError>,
}

impl StubGetSubscribersUseCase {
    pub fn success(subscribers: Vec<SubscriberResult>) -> Self {
        Self {
            result: Ok(subscribers),
        }
    }

    pub fn failure(msg: &str) -> Self {
        Self {
            result: Err(GetSubscribersError::QueryFailed(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetSubscribersUseCase for StubGetSubscribersUseCase {
    async fn execute(&self) -> Result<Vec<SubscriberResult>, GetSubscribersError> {
        self.result.clone()
    }
}
