pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::client::{
    adapter::outgoing::{ClientQueryPostgres, ClientRepositoryPostgres},
    application::{
        client_use_cases::ClientUseCases,
        services::{CreateClientService, GetClientsService},
    },
};
use crate::modules::contact::{
    adapter::outgoing::{ContactQueryPostgres, ContactRepositoryPostgres},
    application::{
        contact_use_cases::ContactUseCases,
        services::{CreateContactService, GetContactsService},
    },
};
use crate::modules::media::{
    adapter::outgoing::LocalImageProcessor, application::ports::outgoing::ImageProcessor,
};
use crate::modules::project::{
    adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres},
    application::{
        project_use_cases::ProjectUseCases,
        services::{CreateProjectService, GetProjectsService},
    },
};
use crate::modules::subscriber::{
    adapter::outgoing::{SubscriberQueryPostgres, SubscriberRepositoryPostgres},
    application::{
        services::{GetSubscribersService, SubscribeService},
        subscriber_use_cases::SubscriberUseCases,
    },
};
use crate::shared::api::custom_json_config;
use crate::shared::config::{AppConfig, ConfigError};

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub client: ClientUseCases,
    pub contact: ContactUseCases,
    pub subscriber: SubscriberUseCases,
    /// Largest accepted image part, in bytes
    pub max_upload_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Wires every use case against the given store and image processor.
pub fn build_app_state(
    db: Arc<DatabaseConnection>,
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    max_upload_bytes: usize,
) -> AppState {
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(&db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(&db));
    let client_repo = ClientRepositoryPostgres::new(Arc::clone(&db));
    let client_query = ClientQueryPostgres::new(Arc::clone(&db));
    let contact_repo = ContactRepositoryPostgres::new(Arc::clone(&db));
    let contact_query = ContactQueryPostgres::new(Arc::clone(&db));
    let subscriber_repo = SubscriberRepositoryPostgres::new(Arc::clone(&db));
    let subscriber_query = SubscriberQueryPostgres::new(Arc::clone(&db));

    AppState {
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(
                project_repo,
                Arc::clone(&image_processor),
            )),
            get_list: Arc::new(GetProjectsService::new(project_query)),
        },
        client: ClientUseCases {
            create: Arc::new(CreateClientService::new(client_repo, image_processor)),
            get_list: Arc::new(GetClientsService::new(client_query)),
        },
        contact: ContactUseCases {
            create: Arc::new(CreateContactService::new(contact_repo)),
            get_list: Arc::new(GetContactsService::new(contact_query)),
        },
        subscriber: SubscriberUseCases {
            subscribe: Arc::new(SubscribeService::new(
                subscriber_repo,
                subscriber_query.clone(),
            )),
            get_list: Arc::new(GetSubscribersService::new(subscriber_query)),
        },
        max_upload_bytes,
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    info!("Starting application...");

    let config = AppConfig::from_env()?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(20)
        .min_connections(2)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    Migrator::up(&conn, None).await?;
    info!("Database migrations applied");

    let db_arc = Arc::new(conn);

    // Uploaded images
    let image_processor = LocalImageProcessor::new(config.upload_dir.clone());
    image_processor.ensure_upload_dir()?;
    info!(upload_dir = %config.upload_dir.display(), "Upload directory ready");

    let state = build_app_state(
        Arc::clone(&db_arc),
        Arc::new(image_processor),
        config.max_upload_bytes,
    );

    let openapi = ApiDoc::openapi();
    let upload_dir = config.upload_dir.clone();
    let client_origin = config.client_origin.clone();

    info!("Server running on: {}", server_url);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&client_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .service(Files::new("/uploads", upload_dir.clone()))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::root);
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    // Clients
    cfg.service(crate::modules::client::adapter::incoming::web::routes::get_clients_handler);
    cfg.service(crate::modules::client::adapter::incoming::web::routes::create_client_handler);
    // Contacts
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::create_contact_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler);
    // Subscribers
    cfg.service(crate::modules::subscriber::adapter::incoming::web::routes::subscribe_handler);
    cfg.service(
        crate::modules::subscriber::adapter::incoming::web::routes::get_subscribers_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = start() {
        error!(error = %e, "Error starting app");
        std::process::exit(1);
    }
}
