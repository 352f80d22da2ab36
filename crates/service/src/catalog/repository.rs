use async_trait::async_trait;

use super::domain::{Category, Product, Record};
use crate::errors::ServiceError;

/// Persistence port shared by every catalog entity.
#[async_trait]
pub trait Repository<E: Record>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<E>, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, ServiceError>;

    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    /// Insert when `entity` has no id, otherwise write it under its id.
    /// Returns the stored record with its id assigned.
    async fn save(&self, entity: E) -> Result<E, ServiceError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError>;
}

pub type CategoryRepository = dyn Repository<Category>;
pub type ProductRepository = dyn Repository<Product>;

/// In-memory repository for tests and the `memory` storage backend.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    struct Table<E> {
        rows: BTreeMap<i64, E>,
        last_id: i64,
    }

    pub struct InMemoryRepository<E> {
        table: Mutex<Table<E>>,
    }

    impl<E> Default for InMemoryRepository<E> {
        fn default() -> Self {
            Self { table: Mutex::new(Table { rows: BTreeMap::new(), last_id: 0 }) }
        }
    }

    impl<E> InMemoryRepository<E> {
        pub fn new() -> Self { Self::default() }

        fn lock(&self) -> Result<MutexGuard<'_, Table<E>>, ServiceError> {
            self.table.lock().map_err(|_| ServiceError::Db("in-memory table lock poisoned".into()))
        }
    }

    #[async_trait]
    impl<E: Record> Repository<E> for InMemoryRepository<E> {
        async fn find_all(&self) -> Result<Vec<E>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<E>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.contains_key(&id))
        }

        async fn save(&self, mut entity: E) -> Result<E, ServiceError> {
            entity.check_columns()?;
            let mut table = self.lock()?;
            let id = match entity.id() {
                Some(id) => id,
                None => table.last_id + 1,
            };
            table.last_id = table.last_id.max(id);
            entity.set_id(id);
            table.rows.insert(id, entity.clone());
            Ok(entity)
        }

        async fn delete_by_id(&self, id: i64) -> Result<(), ServiceError> {
            self.lock()?.rows.remove(&id);
            Ok(())
        }
    }

}
