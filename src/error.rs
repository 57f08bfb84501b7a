use thiserror::Error;

#[derive(Error, Debug)]
pub enum TargetFaceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Only raised while exporting placed arrows.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid value: {0}")]
    Validation(String),
}

pub type TfResult<T> = Result<T, TargetFaceError>;
