// src/application/commands/categories/create.rs
use super::CategoryCommandService;
use crate::{
    application::{
        dto::CategoryDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::category::{CategoryName, NewCategory, UrlHandle},
};

pub struct CreateCategoryCommand {
    pub name: String,
    pub url_handle: String,
}

impl CreateCategoryCommand {
    pub fn builder() -> CreateCategoryCommandBuilder {
        CreateCategoryCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateCategoryCommandBuilder {
    name: Option<String>,
    url_handle: Option<String>,
}

impl CreateCategoryCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn url_handle(mut self, url_handle: impl Into<String>) -> Self {
        self.url_handle = Some(url_handle.into());
        self
    }

    pub fn build(self) -> Result<CreateCategoryCommand, &'static str> {
        Ok(CreateCategoryCommand {
            name: self.name.ok_or("name is required")?,
            url_handle: self.url_handle.ok_or("url handle is required")?,
        })
    }
}

impl CategoryCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<CategoryDto> {
        let new_category = NewCategory::new(
            CategoryName::new(command.name)?,
            UrlHandle::new(command.url_handle)?,
        );

        if self.unique_url_handles {
            self.ensure_url_handle_available(&new_category.url_handle)
                .await?;
        }

        let created = self.write_repo.insert(new_category).await?;
        tracing::info!(
            category_id = %created.id,
            url_handle = %created.url_handle,
            "category created"
        );
        Ok(created.into())
    }

    async fn ensure_url_handle_available(&self, handle: &UrlHandle) -> ApplicationResult<()> {
        match self.read_repo.find_by_url_handle(handle).await? {
            Some(_) => Err(ApplicationError::conflict(format!(
                "url handle '{handle}' is already in use"
            ))),
            None => Ok(()),
        }
    }
}
