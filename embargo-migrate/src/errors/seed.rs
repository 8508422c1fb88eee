use thiserror::Error;

/// Errors that can occur while generating the expiry field SQL.
#[derive(Error, Debug)]
pub enum SeedError {
    /// A CSV file could not be read or parsed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The output file could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The pid has no node or revision id in the mapping files.
    #[error("Missing nid<->pid mapping for {0}")]
    MissingMapping(String),

    /// A mapped id is not an integer.
    #[error("Invalid id {value:?} mapped to {pid}")]
    InvalidId { pid: String, value: String },
}
