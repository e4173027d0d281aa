use std::fmt;

/// Errors produced by user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The value field does not start with a base-10 integer.
    InvalidNumber(String),
    /// The address field is not a number in `[0, size)`.
    InvalidAddress(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidNumber(input) => write!(f, "invalid number {input:?}"),
            Error::InvalidAddress(input) => write!(f, "invalid address {input:?}"),
        }
    }
}

impl std::error::Error for Error {}

/// Errors produced when constructing a simulator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyMemory,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyMemory => f.write_str("memory size must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}
