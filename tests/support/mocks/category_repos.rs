// tests/support/mocks/category_repos.rs
use async_trait::async_trait;
use codepulse::domain::category::{
    Category, CategoryId, CategoryReadRepository, CategoryWriteRepository, NewCategory, UrlHandle,
};
use codepulse::domain::errors::{DomainError, DomainResult};

/* -------------------------------- CategoryWriteRepository -------------------------------- */

/// Write repository whose storage is always unavailable.
pub struct FailingCategoryWrite;

#[async_trait]
impl CategoryWriteRepository for FailingCategoryWrite {
    async fn insert(&self, _category: NewCategory) -> DomainResult<Category> {
        Err(DomainError::Persistence("storage unavailable".into()))
    }
}

/* -------------------------------- CategoryReadRepository -------------------------------- */

/// Read repository answering from a fixed list.
#[derive(Clone, Debug, Default)]
pub struct SeededCategoryRead {
    pub items: Vec<Category>,
}

impl SeededCategoryRead {
    pub fn with_items(items: Vec<Category>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl CategoryReadRepository for SeededCategoryRead {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self.items.iter().find(|c| c.id == id).cloned())
    }

    async fn find_by_url_handle(&self, handle: &UrlHandle) -> DomainResult<Option<Category>> {
        Ok(self.items.iter().find(|c| &c.url_handle == handle).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        Ok(self.items.clone())
    }
}
