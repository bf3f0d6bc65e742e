pub mod categories;

pub use categories::CategoryDto;
