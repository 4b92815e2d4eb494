//! Единый тип ошибок публичного API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("record {record}: invalid {field}: {message}")]
    Parse {
        /// Номер записи без учёта заголовка, с единицы.
        record: usize,
        field: &'static str,
        message: String,
    },

    #[error("cannot derive output path: {0}")]
    OutputPath(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
