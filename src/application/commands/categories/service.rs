// src/application/commands/categories/service.rs
use std::sync::Arc;

use crate::domain::category::{CategoryReadRepository, CategoryWriteRepository};

pub struct CategoryCommandService {
    pub(super) write_repo: Arc<dyn CategoryWriteRepository>,
    pub(super) read_repo: Arc<dyn CategoryReadRepository>,
    pub(super) unique_url_handles: bool,
}

impl CategoryCommandService {
    pub fn new(
        write_repo: Arc<dyn CategoryWriteRepository>,
        read_repo: Arc<dyn CategoryReadRepository>,
        unique_url_handles: bool,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            unique_url_handles,
        }
    }
}
