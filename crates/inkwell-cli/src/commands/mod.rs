//! Command implementations.

pub mod config;
pub mod extract;
pub mod kinds;

pub use self::config::execute_config;
pub use self::extract::{execute_extract, read_input};
pub use self::kinds::execute_kinds;
