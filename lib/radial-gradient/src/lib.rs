pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ChannelRounding, GradientConfig, Zone};

use image::RgbImage;

pub type GradientResult<T> = Result<T, GradientError>;

#[derive(thiserror::Error, Debug)]
pub enum GradientError {
    #[error("Invalid color format: {0:?} (expected #RRGGBB or RRGGBB)")]
    InvalidColorFormat(String),
    #[error("Invalid dimension: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Render the full gradient canvas for `config`
pub fn render(config: &GradientConfig) -> GradientResult<RgbImage> {
    config.render()
}
