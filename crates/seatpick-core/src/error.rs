use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatpickError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid geometry file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid viewBox: {0:?}")]
    InvalidViewBox(String),

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidDimensions { width: f64, height: f64 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SeatpickError>;
