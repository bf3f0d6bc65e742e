// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod category_repos;
pub mod sinks;

pub use category_repos::{FailingCategoryWrite, SeededCategoryRead};
pub use sinks::CapturingSink;
