// src/domain/category/entity.rs
use crate::domain::category::value_objects::{CategoryId, CategoryName, UrlHandle};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub url_handle: UrlHandle,
}

/// A category that has not been stored yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub url_handle: UrlHandle,
}

impl NewCategory {
    pub fn new(name: CategoryName, url_handle: UrlHandle) -> Self {
        Self { name, url_handle }
    }

    /// Attach the identifier chosen by the store.
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            url_handle: self.url_handle,
        }
    }
}
