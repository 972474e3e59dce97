use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::client::application::ports::outgoing::{
    ClientQuery, ClientQueryError, ClientRepository, ClientRepositoryError, ClientResult,
    CreateClientData,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactQuery, ContactQueryError, ContactRepository, ContactRepositoryError, ContactResult,
    CreateContactData,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectQuery, ProjectQueryError, ProjectRepository,
    ProjectRepositoryError, ProjectResult,
};
use crate::modules::subscriber::application::ports::outgoing::{
    SubscriberQuery, SubscriberQueryError, SubscriberRepository, SubscriberRepositoryError,
    SubscriberResult,
};

#[derive(Default)]
struct Tables {
    projects: Vec<ProjectResult>,
    clients: Vec<ClientResult>,
    contacts: Vec<ContactResult>,
    subscribers: Vec<SubscriberResult>,
}

/// Store double implementing every repository and query port.
///
/// Rows are kept in insertion order; listings walk them backwards so records
/// created within the same clock tick still come out newest first.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn subscriber_count(&self) -> usize {
        self.tables().subscribers.len()
    }

    pub fn contact_count(&self) -> usize {
        self.tables().contacts.len()
    }

    pub fn project_count(&self) -> usize {
        self.tables().projects.len()
    }
}

fn newest_first<T: Clone>(rows: &[T]) -> Vec<T> {
    rows.iter().rev().cloned().collect()
}

// ──────────────────────────────────────────────────────────
// Project
// ──────────────────────────────────────────────────────────

#[async_trait]
impl ProjectRepository for InMemoryStore {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let project = ProjectResult {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            image_url: data.image_url,
            created_at: Utc::now(),
        };
        self.tables().projects.push(project.clone());
        Ok(project)
    }
}

#[async_trait]
impl ProjectQuery for InMemoryStore {
    async fn list_projects(&self) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        Ok(newest_first(&self.tables().projects))
    }
}

// ──────────────────────────────────────────────────────────
// Client
// ──────────────────────────────────────────────────────────

#[async_trait]
impl ClientRepository for InMemoryStore {
    async fn create_client(
        &self,
        data: CreateClientData,
    ) -> Result<ClientResult, ClientRepositoryError> {
        let client = ClientResult {
            id: Uuid::new_v4(),
            name: data.name,
            designation: data.designation,
            description: data.description,
            image_url: data.image_url,
            created_at: Utc::now(),
        };
        self.tables().clients.push(client.clone());
        Ok(client)
    }
}

#[async_trait]
impl ClientQuery for InMemoryStore {
    async fn list_clients(&self) -> Result<Vec<ClientResult>, ClientQueryError> {
        Ok(newest_first(&self.tables().clients))
    }
}

// ──────────────────────────────────────────────────────────
// Contact
// ──────────────────────────────────────────────────────────

#[async_trait]
impl ContactRepository for InMemoryStore {
    async fn create_contact(
        &self,
        data: CreateContactData,
    ) -> Result<ContactResult, ContactRepositoryError> {
        let contact = ContactResult {
            id: Uuid::new_v4(),
            full_name: data.full_name,
            email: data.email,
            phone: data.phone,
            city: data.city,
            created_at: Utc::now(),
        };
        self.tables().contacts.push(contact.clone());
        Ok(contact)
    }
}

#[async_trait]
impl ContactQuery for InMemoryStore {
    async fn list_contacts(&self) -> Result<Vec<ContactResult>, ContactQueryError> {
        Ok(newest_first(&self.tables().contacts))
    }
}

// ──────────────────────────────────────────────────────────
// Subscriber
// ──────────────────────────────────────────────────────────

#[async_trait]
impl SubscriberRepository for InMemoryStore {
    async fn subscribe_if_absent(
        &self,
        email: String,
    ) -> Result<Option<SubscriberResult>, SubscriberRepositoryError> {
        // Check and insert under one lock, mirroring the unique index
        let mut tables = self.tables();
        if tables.subscribers.iter().any(|s| s.email == email) {
            return Ok(None);
        }

        let subscriber = SubscriberResult {
            id: Uuid::new_v4(),
            email,
            created_at: Utc::now(),
        };
        tables.subscribers.push(subscriber.clone());
        Ok(Some(subscriber))
    }
}

#[async_trait]
impl SubscriberQuery for InMemoryStore {
    async fn list_subscribers(&self) -> Result<Vec<SubscriberResult>, SubscriberQueryError> {
        Ok(newest_first(&self.tables().subscribers))
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<SubscriberResult>, SubscriberQueryError> {
        Ok(self
            .tables()
            .subscribers
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }
}
