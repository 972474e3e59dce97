mod create_project;
mod get_projects;

pub use create_project::{create_project_handler, __path_create_project_handler, CreateProjectForm};
pub use get_projects::{get_projects_handler, __path_get_projects_handler};
