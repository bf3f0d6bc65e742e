// src/infrastructure/repositories/in_memory_category.rs
use crate::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryWriteRepository, NewCategory, UrlHandle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local category store. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryCategoryRepository {
    inner: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, HashMap<CategoryId, Category>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::persistence("category store lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, HashMap<CategoryId, Category>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::persistence("category store lock poisoned"))
    }
}

#[async_trait]
impl CategoryWriteRepository for InMemoryCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut map = self.write()?;

        let mut id = CategoryId::generate();
        while map.contains_key(&id) {
            id = CategoryId::generate();
        }

        let stored = category.into_category(id);
        map.insert(id, stored.clone());
        tracing::debug!(category_id = %id, "category stored in memory");
        Ok(stored)
    }
}

#[async_trait]
impl CategoryReadRepository for InMemoryCategoryRepository {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_by_url_handle(&self, handle: &UrlHandle) -> DomainResult<Option<Category>> {
        let map = self.read()?;
        Ok(map
            .values()
            .filter(|category| &category.url_handle == handle)
            .min_by_key(|category| category.id)
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.read()?.values().cloned().collect();
        categories.sort_by(|a, b| {
            a.name
                .as_str()
                .cmp(b.name.as_str())
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(categories)
    }
}
