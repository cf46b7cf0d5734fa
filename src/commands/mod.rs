mod list;
mod validate;

pub use list::{ListType, list_command};
pub use validate::{OutputFormat, validate_command};
