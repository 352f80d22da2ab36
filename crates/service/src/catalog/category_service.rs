use std::sync::Arc;
use tracing::instrument;

use super::domain::Category;
use super::repository::CategoryRepository;
use crate::errors::ServiceError;

/// Category use cases. Every write goes through the repository's `save`.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<CategoryRepository>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Category>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Category, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("category", id))
    }

    /// Store a new category; any id carried by the payload is discarded.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::catalog::{CategoryService, domain::Category, repository::memory::InMemoryRepository};
    /// let svc = CategoryService::new(Arc::new(InMemoryRepository::<Category>::new()));
    /// let payload = Category { id: Some(99), name: "Analgesics".into(), description: None };
    /// let created = tokio_test::block_on(svc.create(payload)).unwrap();
    /// assert_eq!(created.id, Some(1));
    /// ```
    #[instrument(skip(self, payload), fields(name = %payload.name))]
    pub async fn create(&self, mut payload: Category) -> Result<Category, ServiceError> {
        payload.id = None;
        self.repo.save(payload).await
    }

    /// Replace every field of an existing category; the path id wins over the payload's.
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, mut payload: Category) -> Result<Category, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found("category", id));
        }
        payload.id = Some(id);
        self.repo.save(payload).await
    }

    /// Products still pointing at the category are left untouched.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            return Err(ServiceError::not_found("category", id));
        }
        self.repo.delete_by_id(id).await
    }
}
