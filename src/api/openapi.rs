use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::client::{
    adapter::incoming::web::routes::CreateClientForm,
    application::ports::outgoing::ClientResult,
};
use crate::modules::contact::{
    adapter::incoming::web::routes::CreateContactRequest,
    application::ports::outgoing::ContactResult,
};
use crate::modules::project::{
    adapter::incoming::web::routes::CreateProjectForm,
    application::ports::outgoing::ProjectResult,
};
use crate::modules::subscriber::{
    adapter::incoming::web::routes::{SubscribeRequest, SubscribeResponse},
    application::ports::outgoing::SubscriberResult,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Landing CMS API",
        version = "1.0.0",
        description = "Content API for the marketing site: projects, client testimonials, contact form and newsletter"
    ),
    paths(
        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,

        // Client endpoints
        crate::modules::client::adapter::incoming::web::routes::get_clients_handler,
        crate::modules::client::adapter::incoming::web::routes::create_client_handler,

        // Contact endpoints
        crate::modules::contact::adapter::incoming::web::routes::create_contact_handler,
        crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler,

        // Subscriber endpoints
        crate::modules::subscriber::adapter::incoming::web::routes::subscribe_handler,
        crate::modules::subscriber::adapter::incoming::web::routes::get_subscribers_handler,
    ),
    components(
        schemas(
            // Error envelope
            ErrorResponse,
            ErrorDetail,

            ProjectResult,
            CreateProjectForm,
            ClientResult,
            CreateClientForm,
            ContactResult,
            CreateContactRequest,
            SubscriberResult,
            SubscribeRequest,
            SubscribeResponse
        )
    ),
    tags(
        (name = "projects", description = "Portfolio projects"),
        (name = "clients", description = "Client testimonials"),
        (name = "contacts", description = "Contact form submissions"),
        (name = "subscribers", description = "Newsletter subscriptions"),
    )
)]
pub struct ApiDoc;
