// src/domain/category/repository.rs
use crate::domain::category::entity::{Category, NewCategory};
use crate::domain::category::value_objects::{CategoryId, UrlHandle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryWriteRepository: Send + Sync {
    /// Store a new category and return it with its assigned id.
    async fn insert(&self, category: NewCategory) -> DomainResult<Category>;
}

#[async_trait]
pub trait CategoryReadRepository: Send + Sync {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>>;
    async fn find_by_url_handle(&self, handle: &UrlHandle) -> DomainResult<Option<Category>>;
    /// All categories ordered by name, then id.
    async fn list(&self) -> DomainResult<Vec<Category>>;
}
