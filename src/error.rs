use thiserror::Error;

pub type SkewResult<T> = Result<T, SkewError>;

#[derive(Debug, Error)]
pub enum SkewError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("singular transform configuration: {0}")]
    SingularTransform(String),

    #[error("unknown projection `{0}`")]
    UnknownProjection(String),
}
