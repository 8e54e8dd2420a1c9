use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("options root must be a json object, got {kind}")]
    NonObjectRoot { kind: &'static str },

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
