use thiserror::Error;

/// Errors raised while validating inputs to the globe geometry.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GlobeError {
    #[error("invalid coordinate: latitude {latitude} must be in [-90, 90] and longitude {longitude} in [-180, 180]")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("invalid sphere surface: radius {radius} must be > 0 and offset {offset} >= 0")]
    InvalidSurface { radius: f64, offset: f64 },

    #[error("invalid hit radius {0}: must be finite and > 0")]
    InvalidHitRadius(f64),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GlobeError>;
