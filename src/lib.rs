// Library root — the greeting operation plus the config, logging and error
// layers the `greet` binary is built from.

pub mod config;
pub mod error;
pub mod greeting;
pub mod logger;

pub use error::AppError;
pub use greeting::{greet, greet_to, Greeting, Person};
