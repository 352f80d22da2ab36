use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// A storable record whose identifier is assigned by the repository.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> Option<i64>;
    fn set_id(&mut self, id: i64);

    /// Reject values the relational columns cannot hold.
    fn check_columns(&self) -> Result<(), ServiceError> { Ok(()) }
}

/// Product category. Used both as request payload and as response body;
/// an `id` sent by the client is never trusted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Record for Category {
    fn id(&self) -> Option<i64> { self.id }
    fn set_id(&mut self, id: i64) { self.id = Some(id); }
}

/// Stored product row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
}

impl Record for Product {
    fn id(&self) -> Option<i64> { self.id }
    fn set_id(&mut self, id: i64) { self.id = Some(id); }

    fn check_columns(&self) -> Result<(), ServiceError> {
        if self.name.chars().count() > models::produto::NAME_MAX_LEN {
            return Err(ServiceError::Db(format!(
                "value too long for produtos.name (max {})",
                models::produto::NAME_MAX_LEN
            )));
        }
        Ok(())
    }
}

/// `{"id": ..}` reference to a category, as embedded in product payloads.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CategoryRef {
    #[serde(default)]
    pub id: Option<i64>,
}

/// Product create/update payload.
///
/// Missing fields fall back to their defaults: updates replace the whole row.
/// The category may be given as `category_id` or as a nested `category`
/// (alias `categoria`) object carrying an `id`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProductInput {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default, alias = "categoria")]
    pub category: Option<CategoryRef>,
}

impl ProductInput {
    pub fn category_id(&self) -> Option<i64> {
        self.category_id
            .or_else(|| self.category.as_ref().and_then(|c| c.id))
    }
}

/// Product response body with its category embedded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProductView {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub category_id: i64,
    /// `None` once the referenced category has been deleted.
    pub category: Option<Category>,
}

impl ProductView {
    pub fn new(product: Product, category: Option<Category>) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            category_id: product.category_id,
            category,
        }
    }
}
