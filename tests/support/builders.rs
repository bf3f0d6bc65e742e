// tests/support/builders.rs
use codepulse::domain::category::{Category, CategoryId, CategoryName, UrlHandle};

pub struct CategoryBuilder {
    id: CategoryId,
    name: String,
    url_handle: String,
}

impl CategoryBuilder {
    pub fn new() -> Self {
        Self {
            id: CategoryId::generate(),
            name: "Tech".into(),
            url_handle: "tech".into(),
        }
    }

    pub fn id(mut self, id: CategoryId) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn url_handle(mut self, url_handle: impl Into<String>) -> Self {
        self.url_handle = url_handle.into();
        self
    }

    pub fn build(self) -> Category {
        Category {
            id: self.id,
            name: CategoryName::new(self.name).expect("builder name is storable"),
            url_handle: UrlHandle::new(self.url_handle).expect("builder handle is storable"),
        }
    }
}
