use thiserror::Error;

/// Errors originating from the rendering pipeline.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid hex color {0:?} (expected \"#RRGGBB\")")]
    InvalidHexColor(String),

    #[error("invalid gradient steps: {0} (must be >= 2)")]
    InvalidGradientSteps(usize),

    #[error("invalid palette size: {0} (must be >= 2)")]
    InvalidPaletteSize(usize),

    #[error("failed to encode PNG: {0}")]
    PngEncode(#[from] png::EncodingError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
