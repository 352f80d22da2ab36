use async_trait::async_trait;
use models::{categoria, produto};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};

use crate::catalog::domain::{Category, Product};
use crate::catalog::repository::Repository;
use crate::errors::ServiceError;

impl From<categoria::Model> for Category {
    fn from(m: categoria::Model) -> Self {
        Self { id: Some(m.id), name: m.name, description: m.description }
    }
}

impl From<produto::Model> for Product {
    fn from(m: produto::Model) -> Self {
        Self { id: Some(m.id), name: m.name, price: m.price, category_id: m.category_id }
    }
}

pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Category> for SeaOrmCategoryRepository {
    async fn find_all(&self) -> Result<Vec<Category>, ServiceError> {
        let rows = categoria::Entity::find()
            .order_by_asc(categoria::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Category::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, ServiceError> {
        Ok(categoria::Entity::find_by_id(id).one(&self.db).await?.map(Category::from))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(categoria::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn save(&self, entity: Category) -> Result<Category, ServiceError> {
        let mut am = categoria::ActiveModel {
            id: NotSet,
            name: Set(entity.name),
            description: Set(entity.description),
        };
        let saved = match entity.id {
            Some(id) => {
                am.id = Set(id);
                if self.exists_by_id(id).await? {
                    am.update(&self.db).await?
                } else {
                    am.insert(&self.db).await?
                }
            }
            None => am.insert(&self.db).await?,
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        categoria::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl Repository<Product> for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = produto::Entity::find()
            .order_by_asc(produto::Column::Id)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        Ok(produto::Entity::find_by_id(id).one(&self.db).await?.map(Product::from))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(produto::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn save(&self, entity: Product) -> Result<Product, ServiceError> {
        let mut am = produto::ActiveModel {
            id: NotSet,
            name: Set(entity.name),
            price: Set(entity.price),
            category_id: Set(entity.category_id),
        };
        let saved = match entity.id {
            Some(id) => {
                am.id = Set(id);
                if self.exists_by_id(id).await? {
                    am.update(&self.db).await?
                } else {
                    am.insert(&self.db).await?
                }
            }
            None => am.insert(&self.db).await?,
        };
        Ok(saved.into())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
        produto::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn category_repository_crud() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmCategoryRepository { db };

        let created = repo
            .save(Category { id: None, name: "Analgesics".into(), description: Some("pain".into()) })
            .await?;
        let id = created.id.expect("assigned id");
        assert!(repo.exists_by_id(id).await?);
        assert_eq!(repo.find_by_id(id).await?, Some(created.clone()));

        let replaced = repo
            .save(Category { id: Some(id), name: "Antipyretics".into(), description: None })
            .await?;
        assert_eq!(replaced.id, Some(id));
        assert_eq!(repo.find_by_id(id).await?.map(|c| c.name), Some("Antipyretics".to_string()));
        assert!(repo.find_all().await?.iter().any(|c| c.id == Some(id)));

        repo.delete_by_id(id).await?;
        assert!(!repo.exists_by_id(id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn product_repository_crud() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let categories = SeaOrmCategoryRepository { db: db.clone() };
        let repo = SeaOrmProductRepository { db };

        let cat = categories.save(Category { id: None, name: "Vitamins".into(), description: None }).await?;
        let cat_id = cat.id.expect("category id");
        let created = repo
            .save(Product { id: None, name: "Vitamin C".into(), price: 12.5, category_id: cat_id })
            .await?;
        let id = created.id.expect("product id");
        assert_eq!(repo.find_by_id(id).await?, Some(created));

        let updated = repo
            .save(Product { id: Some(id), name: "Vitamin D".into(), price: 20.0, category_id: cat_id })
            .await?;
        assert_eq!(updated.price, 20.0);

        repo.delete_by_id(id).await?;
        assert_eq!(repo.find_by_id(id).await?, None);
        categories.delete_by_id(cat_id).await?;
        Ok(())
    }
}
