// src/application/commands/categories/mod.rs
mod create;
mod service;

pub use create::{CreateCategoryCommand, CreateCategoryCommandBuilder};
pub use service::CategoryCommandService;
