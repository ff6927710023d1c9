use thiserror::Error;

/// Errors originating from the core fractal engine.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid zoom: {0} (must be finite and >= 0.5)")]
    InvalidZoom(f64),

    #[error("invalid pan offset: ({0}, {1}) (must be finite)")]
    InvalidOffset(f64, f64),
}
