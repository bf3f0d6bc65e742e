pub mod add_category;
pub mod control;

pub use add_category::{AddCategoryForm, LogSink, SubmitSink};
pub use control::FormControl;
