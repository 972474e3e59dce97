mod create_project_service;
mod get_projects_service;

pub use create_project_service::CreateProjectService;
pub use get_projects_service::GetProjectsService;
