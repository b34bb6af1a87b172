pub mod name;
pub mod unicode;


pub use name::{is_valid_name, validate_name, NameError, NameScript};
