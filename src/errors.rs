use thiserror::Error;

pub type OmikujiResult<T> = Result<T, OmikujiError>;

#[derive(Debug, Error)]
pub enum OmikujiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("history capacity must be at least 1")]
    ZeroCapacity,
}

impl OmikujiError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        OmikujiError::Config(msg.into())
    }
}
