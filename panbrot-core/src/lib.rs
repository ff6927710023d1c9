pub mod error;
pub mod escape;
pub mod event;
pub mod point;
pub mod viewport;

// Re-export primary types for convenience.
pub use error::CoreError;
pub use escape::{iterations, iterations_at, ESCAPE_RADIUS_SQ};
pub use event::ViewportEvent;
pub use point::Point;
pub use viewport::{ViewportState, BASE_RANGE, MAX_ZOOM, MIN_ZOOM};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
