pub mod cli;
pub mod error;
pub mod finding;
pub mod manifest;
pub mod package;
pub mod report;
pub mod schema;
pub mod validators;

pub use error::{HathicheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FATAL: i32 = 1;
pub const EXIT_USAGE: i32 = 2;
