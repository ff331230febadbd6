//! Defines the error types for configuration updates.

use thiserror::Error;

/// Why an options update was rejected. The configuration is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Breakpoint entry {index} is not an object")]
    NotAnObject { index: usize },
    #[error("Breakpoint entry {index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },
}
