use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;
use uuid::Uuid;

/// Identifier assigned by the storage layer when a category is first persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(Uuid);

impl CategoryId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            Err(DomainError::validation("category id must not be nil"))
        } else {
            Ok(Self(id))
        }
    }

    /// Fresh random identifier for stores that do not generate their own.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Text columns cannot hold NUL, so neither store accepts it.
fn reject_nul(field: &str, value: String) -> DomainResult<String> {
    if value.contains('\0') {
        Err(DomainError::validation(format!(
            "{field} must not contain NUL characters"
        )))
    } else {
        Ok(value)
    }
}

/// Display name of a category. Kept verbatim; the empty string is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryName(String);

impl CategoryName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        reject_nul("name", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<CategoryName> for String {
    fn from(value: CategoryName) -> Self {
        value.0
    }
}

/// Slug used in category URLs. Stored exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlHandle(String);

impl UrlHandle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        reject_nul("url handle", value.into()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UrlHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<UrlHandle> for String {
    fn from(value: UrlHandle) -> Self {
        value.0
    }
}
