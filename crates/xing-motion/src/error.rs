use thiserror::Error;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("stopping distance must be positive, got {0}")]
    NonPositiveStoppingDistance(f64),

    #[error("queue spacing must be non-negative, got {0}")]
    NegativeQueueSpacing(f64),
}

pub type MotionResult<T> = Result<T, MotionError>;
