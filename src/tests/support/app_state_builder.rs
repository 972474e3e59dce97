use std::sync::Arc;

use actix_web::web;

use crate::modules::client::application::{
    client_use_cases::ClientUseCases,
    ports::incoming::use_cases::{CreateClientUseCase, GetClientsUseCase},
};
use crate::modules::contact::application::{
    contact_use_cases::ContactUseCases,
    ports::incoming::use_cases::{CreateContactUseCase, GetContactsUseCase},
};
use crate::modules::project::application::{
    ports::incoming::use_cases::{CreateProjectUseCase, GetProjectsUseCase},
    project_use_cases::ProjectUseCases,
};
use crate::modules::subscriber::application::{
    ports::incoming::use_cases::{GetSubscribersUseCase, SubscribeUseCase},
    subscriber_use_cases::SubscriberUseCases,
};
use crate::shared::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::tests::support::stubs::*;
use crate::AppState;

pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    client: ClientUseCases,
    contact: ContactUseCases,
    subscriber: SubscriberUseCases,
    max_upload_bytes: usize,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase::repo_error(
                    "not used in this test",
                )),
                get_list: Arc::new(StubGetProjectsUseCase::success(vec![])),
            },
            client: ClientUseCases {
                create: Arc::new(StubCreateClientUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetClientsUseCase::success(vec![])),
            },
            contact: ContactUseCases {
                create: Arc::new(StubCreateContactUseCase::repo_error(
                    "not used in this test",
                )),
                get_list: Arc::new(StubGetContactsUseCase::success(vec![])),
            },
            subscriber: SubscriberUseCases {
                subscribe: Arc::new(StubSubscribeUseCase::repo_error("not used in this test")),
                get_list: Arc::new(StubGetSubscribersUseCase::success(vec![])),
            },
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_client(
        mut self,
        uc: impl CreateClientUseCase + Send + Sync + 'static,
    ) -> Self {
        self.client.create = Arc::new(uc);
        self
    }

    pub fn with_get_clients(mut self, uc: impl GetClientsUseCase + Send + Sync + 'static) -> Self {
        self.client.get_list = Arc::new(uc);
        self
    }

    pub fn with_create_contact(
        mut self,
        uc: impl CreateContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.create = Arc::new(uc);
        self
    }

    pub fn with_get_contacts(mut self, uc: impl GetContactsUseCase + Send + Sync + 'static) -> Self {
        self.contact.get_list = Arc::new(uc);
        self
    }

    pub fn with_subscribe(mut self, uc: impl SubscribeUseCase + Send + Sync + 'static) -> Self {
        self.subscriber.subscribe = Arc::new(uc);
        self
    }

    pub fn with_get_subscribers(
        mut self,
        uc: impl GetSubscribersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.subscriber.get_list = Arc::new(uc);
        self
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            client: self.client,
            contact: self.contact,
            subscriber: self.subscriber,
            max_upload_bytes: self.max_upload_bytes,
        })
    }
}
