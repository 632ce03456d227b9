use thiserror::Error;

/// Everything that can abort a guest list run.
#[derive(Debug, Error)]
pub enum GuestListError {
    /// A line is not a JSON object, or a required field is missing / mistyped.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A coordinate is not a number, or is outside its valid range.
    #[error("line {line}: invalid {field} '{value}'")]
    Value {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GuestListError>;
