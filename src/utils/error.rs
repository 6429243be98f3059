use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilizationError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UtilizationError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::ParseError {
            line,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidConfigValueError { .. } => 2,
            Self::FileNotFound { .. } | Self::IoError(_) => 3,
            Self::ParseError { .. } => 4,
            Self::CsvError(_) | Self::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, UtilizationError>;
