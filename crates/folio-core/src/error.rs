use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("the CSV file contains no rows")]
    EmptyInput,

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
}
