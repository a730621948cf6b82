use lt_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid tracking configuration: {0}")]
    Config(CoreError),

    #[error("invalid booking endpoint: {0}")]
    Booking(CoreError),
}

pub type EngineResult<T> = Result<T, EngineError>;
