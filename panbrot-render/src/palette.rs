use crate::color::Color;
use crate::error::RenderError;

/// An ordered, immutable sequence of colors indexed by escape-time count.
///
/// A palette of length `N` supports `N − 1` iterations: counts `0..N-1`
/// index the sequence directly, and any count at or above `N − 1` (the
/// "did not escape" signal) maps to the interior color. Built once, read
/// for the process lifetime; safe to share across concurrent renders.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    interior: Color,
}

impl Palette {
    /// Build a palette from an explicit color sequence.
    ///
    /// At least two colors are required so the iteration bound stays >= 1.
    pub fn from_colors(colors: Vec<Color>) -> crate::Result<Self> {
        if colors.len() < 2 {
            return Err(RenderError::InvalidPaletteSize(colors.len()));
        }
        Ok(Self {
            colors,
            interior: Color::BLACK,
        })
    }

    /// Replace the interior color (black by default).
    pub fn with_interior(mut self, interior: Color) -> Self {
        self.interior = interior;
        self
    }

    /// Number of colors in the palette.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// The iteration bound this palette supports: one less than its length.
    #[inline]
    pub fn max_iterations(&self) -> u32 {
        self.colors.len() as u32 - 1
    }

    /// The color for points that never escape.
    pub fn interior_color(&self) -> Color {
        self.interior
    }

    /// Resolve an iteration count to a color.
    ///
    /// Counts at or above [`max_iterations`](Self::max_iterations) are
    /// treated as interior.
    #[inline]
    pub fn color_for(&self, count: u32) -> Color {
        if count >= self.max_iterations() {
            self.interior
        } else {
            self.colors[count as usize]
        }
    }

    /// The raw color sequence, for preview strips and tests.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

/// Build a palette by linear interpolation between two endpoint colors.
///
/// Step `i` of `steps` uses the blend factor `i / (steps − 1)`, so the first
/// entry is exactly `start` and the last exactly `end`. `steps < 2` is
/// rejected rather than dividing by zero.
pub fn generate_gradient(start: Color, end: Color, steps: usize) -> crate::Result<Palette> {
    if steps < 2 {
        return Err(RenderError::InvalidGradientSteps(steps));
    }
    let colors = (0..steps)
        .map(|i| start.lerp(end, i as f64 / (steps - 1) as f64))
        .collect();
    Palette::from_colors(colors)
}
