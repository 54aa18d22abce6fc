use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("{file} not found in {}", dir.display())]
    MissingSourceFile { file: String, dir: PathBuf },

    #[error("CSV file does not have the required columns (expected at least {expected}, found {found})")]
    MalformedHeader { expected: usize, found: usize },

    #[error("No quotes found in the CSV file")]
    EmptyDataset,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
