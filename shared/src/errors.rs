//! Shared error types for the tournament planner

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Malformed CSV at line {line}: {message}")]
    CsvError { line: usize, message: String },
}

impl SharedError {
    pub fn csv(line: usize, message: impl Into<String>) -> Self {
        SharedError::CsvError {
            line,
            message: message.into(),
        }
    }

    pub fn invalid_config(field: impl Into<String>, value: impl ToString) -> Self {
        SharedError::InvalidConfig {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
