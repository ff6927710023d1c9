pub mod color;
pub mod error;
pub mod export;
pub mod palette;
pub mod raster;
pub mod renderer;

// Re-export primary types for convenience.
pub use color::Color;
pub use error::RenderError;
pub use export::{export_png, ExportMetadata};
pub use palette::{generate_gradient, Palette};
pub use raster::{Framebuffer, RasterTarget};
pub use renderer::{render, render_cancellable, RenderCancel, RenderStats};

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
