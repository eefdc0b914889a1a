use thiserror::Error;

#[derive(Error, Debug)]
pub enum PassbookError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unable to parse date: {0}")]
    DateFormat(String),

    #[error("Unable to parse amount: {0}")]
    AmountFormat(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, PassbookError>;
