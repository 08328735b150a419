use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("failed to write results: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{combatant}: expected {expected} elements, found {actual}")]
    Inconsistent {
        combatant: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type BenchmarkResult<T> = Result<T, BenchmarkError>;
