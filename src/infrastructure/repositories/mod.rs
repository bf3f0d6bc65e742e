// src/infrastructure/repositories/mod.rs
mod error;
mod in_memory_category;
mod postgres_category;

pub use error::map_sqlx;
pub use in_memory_category::InMemoryCategoryRepository;
pub use postgres_category::PostgresCategoryRepository;
