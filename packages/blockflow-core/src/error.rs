use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport width must be positive, got {0}")]
    NonPositiveWidth(f32),
    #[error("viewport height must be positive, got {0}")]
    NonPositiveHeight(f32),
    #[error("device pixel ratio must be positive, got {0}")]
    NonPositiveDevicePixelRatio(f32),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("maximum block width must be positive, got {0}")]
    NonPositiveBlockWidth(f32),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    #[error("asset loading failed: {0}")]
    Failed(String),
    #[error("asset loading timed out")]
    TimedOut,
    #[error("asset loading was cancelled")]
    Cancelled,
}
