use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::catalog::{
    domain::{Category, Product},
    repo::seaorm::{SeaOrmCategoryRepository, SeaOrmProductRepository},
    repository::{memory::InMemoryRepository, CategoryRepository, ProductRepository},
    CategoryService, ProductService,
};

/// Shared handler state. Both services see the same category repository.
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub products: ProductService,
}

impl AppState {
    pub fn new(categories: Arc<CategoryRepository>, products: Arc<ProductRepository>) -> Self {
        Self {
            categories: CategoryService::new(Arc::clone(&categories)),
            products: ProductService::new(products, categories),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Category>::new()),
            Arc::new(InMemoryRepository::<Product>::new()),
        )
    }

    pub fn with_database(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmCategoryRepository { db: db.clone() }),
            Arc::new(SeaOrmProductRepository { db }),
        )
    }
}
