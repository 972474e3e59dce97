use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::media::application::{
    domain::entities::ImageLabel, ports::outgoing::ImageProcessor,
};
use crate::modules::project::application::ports::{
    incoming::use_cases::{CreateProjectCommand, CreateProjectError, CreateProjectUseCase},
    outgoing::{CreateProjectData, ProjectRepository, ProjectResult},
};

#[derive(Clone)]
pub struct CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    repository: R,
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    pub fn new(repository: R, image_processor: Arc<dyn ImageProcessor + Send + Sync>) -> Self {
        Self {
            repository,
            image_processor,
        }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        let (name, description, image) = command.into_parts();

        // The record is only written once the image (if any) is safely on disk
        let image_url = match image {
            Some(bytes) => Some(
                self.image_processor
                    .save_cropped(bytes, ImageLabel::Project)
                    .await
                    .map_err(|e| CreateProjectError::ImageProcessingFailed(e.to_string()))?,
            ),
            None => None,
        };

        let data = CreateProjectData {
            name,
            description,
            image_url: image_url.clone(),
        };

        let project = match self.repository.create_project(data).await {
            Ok(project) => project,
            Err(e) => {
                // Nothing references the stored image any more
                if let Some(url) = image_url.as_deref() {
                    self.image_processor.discard(url).await;
                }
                return Err(CreateProjectError::RepositoryError(e.to_string()));
            }
        };

        info!(project_id = %project.id, "Project created");

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::{mock, predicate::*};
    use uuid::Uuid;

    use crate::modules::media::application::ports::outgoing::ImageProcessingError;
    use crate::modules::project::application::ports::outgoing::ProjectRepositoryError;

    // ──────────────────────────────────────────────────────────
    // Mocks
    // ──────────────────────────────────────────────────────────

    mock! {
        pub ImageProcessorMock {}
        #[async_trait]
        impl ImageProcessor for ImageProcessorMock {
            async fn save_cropped(
                &self,
                bytes: Vec<u8>,
                label: ImageLabel,
            ) -> Result<String, ImageProcessingError>;

            async fn discard(&self, url: &str);
        }
    }

    mock! {
        pub ProjectRepositoryMock {}
        #[async_trait]
        impl ProjectRepository for ProjectRepositoryMock {
            async fn create_project(
                &self,
                data: CreateProjectData,
            ) -> Result<ProjectResult, ProjectRepositoryError>;
        }
    }

    // ──────────────────────────────────────────────────────────
    // Helpers
    // ──────────────────────────────────────────────────────────

    fn command(image: Option<Vec<u8>>) -> CreateProjectCommand {
        CreateProjectCommand::new(
            Some("Harbour View".to_string()),
            Some("Waterfront homes".to_string()),
            image,
        )
        .unwrap()
    }

    fn stored(data: &CreateProjectData) -> ProjectResult {
        ProjectResult {
            id: Uuid::new_v4(),
            name: data.name.clone(),
            description: data.description.clone(),
            image_url: data.image_url.clone(),
            created_at: Utc::now(),
        }
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_without_image_skips_processor() {
        let mut processor = MockImageProcessorMock::new();
        processor.expect_save_cropped().never();

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_create_project()
            .withf(|data| data.image_url.is_none() && data.name == "Harbour View")
            .times(1)
            .returning(|data| Ok(stored(&data)));

        let service = CreateProjectService::new(repo, Arc::new(processor));

        let project = service.execute(command(None)).await.unwrap();

        assert_eq!(project.name, "Harbour View");
        assert_eq!(project.description, "Waterfront homes");
        assert!(project.image_url.is_none());
    }

    #[tokio::test]
    async fn create_with_image_stores_processed_url() {
        let mut processor = MockImageProcessorMock::new();
        processor
            .expect_save_cropped()
            .with(eq(vec![1u8, 2, 3]), eq(ImageLabel::Project))
            .times(1)
            .returning(|_, _| Ok("/uploads/project-1700000000000.jpg".to_string()));

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_create_project()
            .withf(|data| {
                data.image_url.as_deref() == Some("/uploads/project-1700000000000.jpg")
            })
            .times(1)
            .returning(|data| Ok(stored(&data)));

        let service = CreateProjectService::new(repo, Arc::new(processor));

        let project = service.execute(command(Some(vec![1, 2, 3]))).await.unwrap();

        assert_eq!(
            project.image_url.as_deref(),
            Some("/uploads/project-1700000000000.jpg")
        );
    }

    #[tokio::test]
    async fn image_failure_creates_no_record() {
        let mut processor = MockImageProcessorMock::new();
        processor
            .expect_save_cropped()
            .returning(|_, _| Err(ImageProcessingError::Decode("bad bytes".to_string())));

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_create_project().never();

        let service = CreateProjectService::new(repo, Arc::new(processor));

        let result = service.execute(command(Some(vec![9, 9, 9]))).await;

        match result {
            Err(CreateProjectError::ImageProcessingFailed(msg)) => {
                assert!(msg.contains("bad bytes"));
            }
            other => panic!("Expected ImageProcessingFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn repository_error_is_mapped() {
        let processor = MockImageProcessorMock::new();

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_create_project().returning(|_| {
            Err(ProjectRepositoryError::DatabaseError(
                "connection lost".to_string(),
            ))
        });

        let service = CreateProjectService::new(repo, Arc::new(processor));

        let result = service.execute(command(None)).await;

        match result {
            Err(CreateProjectError::RepositoryError(msg)) => {
                assert!(msg.contains("connection lost"));
            }
            other => panic!("Expected RepositoryError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn repository_error_discards_stored_image() {
        let mut processor = MockImageProcessorMock::new();
        processor
            .expect_save_cropped()
            .returning(|_, _| Ok("/uploads/project-42.jpg".to_string()));
        processor
            .expect_discard()
            .withf(|url: &str| url == "/uploads/project-42.jpg")
            .times(1)
            .return_const(());

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_create_project()
            .returning(|_| Err(ProjectRepositoryError::DatabaseError("insert failed".to_string())));

        let service = CreateProjectService::new(repo, Arc::new(processor));

        let result = service.execute(command(Some(vec![1, 2, 3]))).await;

        assert!(matches!(result, Err(CreateProjectError::RepositoryError(_))));
    }

    #[tokio::test]
    async fn repository_error_leaves_upload_dir_empty() {
        use crate::modules::media::adapter::outgoing::LocalImageProcessor;
        use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
        use std::io::Cursor;

        let mut png = Vec::new();
        DynamicImage::ImageRgb8(RgbImage::from_pixel(640, 480, Rgb([200, 30, 30])))
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();

        let mut repo = MockProjectRepositoryMock::new();
        repo.expect_create_project()
            .times(1)
            .returning(|_| Err(ProjectRepositoryError::DatabaseError("insert failed".to_string())));

        let service =
            CreateProjectService::new(repo, Arc::new(LocalImageProcessor::new(dir.path())));

        let result = service.execute(command(Some(png))).await;

        assert!(matches!(result, Err(CreateProjectError::RepositoryError(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
