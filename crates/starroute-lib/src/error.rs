use thiserror::Error;

/// Convenient result alias for the star route library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a route CSV header lacks one of the required columns.
    #[error(
        "invalid CSV format. Required columns: {}{}",
        .required.join(", "),
        format_missing(.missing)
    )]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    /// Raised when a route CSV row carries a value that cannot be imported.
    #[error("invalid {column} value {value:?} at row {row}")]
    InvalidField {
        row: usize,
        column: String,
        value: String,
    },

    /// Wrapper for structurally broken CSV input (uneven rows, bad quoting).
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when a route is too large for exhaustive optimization.
    #[error("route has {len} systems; exact optimization is limited to {max}")]
    RouteTooLarge { len: usize, max: usize },

    /// Raised when session configuration fails validation.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether this error reports malformed route CSV input.
    ///
    /// A decode that fails with one of these errors imports zero systems.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::MissingColumns { .. } | Error::InvalidField { .. } | Error::Csv(_)
        )
    }
}

fn format_missing(missing: &[String]) -> String {
    if missing.is_empty() {
        String::new()
    } else {
        format!(" (missing: {})", missing.join(", "))
    }
}
