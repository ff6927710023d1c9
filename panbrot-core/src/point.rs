use serde::{Deserialize, Serialize};

/// A point on the complex plane, `x + yi`.
///
/// This is a lightweight, `Copy` type used transiently between the viewport
/// transform and the iteration loop. We roll our own instead of pulling in
/// `num::Complex` because the hot loop works on decomposed real arithmetic
/// anyway and never needs complex operators.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `x² + y²` without taking the square root.
    #[inline]
    pub fn norm_sq(self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.y >= 0.0 {
            write!(f, "{} + {}i", self.x, self.y)
        } else {
            write!(f, "{} - {}i", self.x, -self.y)
        }
    }
}
