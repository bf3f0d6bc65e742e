// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::categories::CategoryCommandService,
        queries::categories::CategoryQueryService,
    },
    domain::category::{CategoryReadRepository, CategoryWriteRepository},
};

pub struct ApplicationServices {
    pub category_commands: Arc<CategoryCommandService>,
    pub category_queries: Arc<CategoryQueryService>,
}

impl ApplicationServices {
    /// Wire the category services around shared repository handles.
    /// `unique_url_handles` turns on the duplicate url handle check on create.
    pub fn new(
        category_write_repo: Arc<dyn CategoryWriteRepository>,
        category_read_repo: Arc<dyn CategoryReadRepository>,
        unique_url_handles: bool,
    ) -> Self {
        let category_commands = Arc::new(CategoryCommandService::new(
            Arc::clone(&category_write_repo),
            Arc::clone(&category_read_repo),
            unique_url_handles,
        ));

        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(
            &category_read_repo,
        )));

        Self {
            category_commands,
            category_queries,
        }
    }
}
