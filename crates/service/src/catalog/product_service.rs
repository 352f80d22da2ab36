use std::{collections::HashMap, sync::Arc};
use tracing::{error, instrument, warn};

use super::domain::{Category, Product, ProductInput, ProductView};
use super::repository::{CategoryRepository, ProductRepository};
use crate::errors::ServiceError;

/// Product use cases. Writes require the referenced category to exist.
#[derive(Clone)]
pub struct ProductService {
    products: Arc<ProductRepository>,
    categories: Arc<CategoryRepository>,
}

impl ProductService {
    pub fn new(products: Arc<ProductRepository>, categories: Arc<CategoryRepository>) -> Self {
        Self { products, categories }
    }

    pub async fn list(&self) -> Result<Vec<ProductView>, ServiceError> {
        let products = self.products.find_all().await?;
        let categories: HashMap<i64, Category> = self
            .categories
            .find_all()
            .await?
            .into_iter()
            .filter_map(|c| c.id.map(|id| (id, c)))
            .collect();
        Ok(products
            .into_iter()
            .map(|p| {
                let category = categories.get(&p.category_id).cloned();
                ProductView::new(p, category)
            })
            .collect())
    }

    pub async fn get(&self, id: i64) -> Result<ProductView, ServiceError> {
        let product = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("product", id))?;
        let category = self.categories.find_by_id(product.category_id).await?;
        Ok(ProductView::new(product, category))
    }

    /// Create a product.
    ///
    /// Reference and name problems come back as `InvalidReference` and
    /// `InvalidField`; every other failure is reported as `Unexpected`.
    #[instrument(skip(self, input), fields(category_id = ?input.category_id()))]
    pub async fn create(&self, input: ProductInput) -> Result<ProductView, ServiceError> {
        match self.try_create(input).await {
            Ok(view) => Ok(view),
            Err(e @ (ServiceError::InvalidReference(_) | ServiceError::InvalidField(_))) => {
                warn!(error = %e, "product_create_rejected");
                Err(e)
            }
            Err(e) => {
                error!(error = %e, "product_create_failed");
                Err(ServiceError::Unexpected(e.to_string()))
            }
        }
    }

    async fn try_create(&self, input: ProductInput) -> Result<ProductView, ServiceError> {
        let (category_id, category) = self.referenced_category(input.category_id()).await?;
        let name = input.name.unwrap_or_default();
        models::produto::validate_name(&name).map_err(|e| ServiceError::InvalidField(e.to_string()))?;

        let product = Product { id: None, name, price: input.price, category_id };
        let saved = self.products.save(product).await?;
        Ok(ProductView::new(saved, Some(category)))
    }

    /// Replace every field of an existing product.
    ///
    /// The category reference is checked again; the name is not, so an update
    /// may store an empty name.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: ProductInput) -> Result<ProductView, ServiceError> {
        if !self.products.exists_by_id(id).await? {
            return Err(ServiceError::not_found("product", id));
        }
        let (category_id, category) = self.referenced_category(input.category_id()).await?;
        let product = Product {
            id: Some(id),
            name: input.name.unwrap_or_default(),
            price: input.price,
            category_id,
        };
        let saved = self.products.save(product).await?;
        Ok(ProductView::new(saved, Some(category)))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.products.exists_by_id(id).await? {
            return Err(ServiceError::not_found("product", id));
        }
        self.products.delete_by_id(id).await
    }

    async fn referenced_category(&self, category_id: Option<i64>) -> Result<(i64, Category), ServiceError> {
        let id = category_id
            .ok_or_else(|| ServiceError::InvalidReference("category_id required".into()))?;
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::InvalidReference(format!("category {} does not exist", id)))?;
        Ok((id, category))
    }
}
