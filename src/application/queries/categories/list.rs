use super::CategoryQueryService;
use crate::application::{dto::CategoryDto, error::ApplicationResult};

impl CategoryQueryService {
    pub async fn list_categories(&self) -> ApplicationResult<Vec<CategoryDto>> {
        let categories = self.read_repo.list().await?;
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }
}
