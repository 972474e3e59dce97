mod create_project;
mod get_projects;

pub use create_project::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, ProjectCommandError,
};
pub use get_projects::{GetProjectsError, GetProjectsUseCase};
