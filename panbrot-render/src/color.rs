use crate::error::RenderError;

/// An RGB color, one byte per channel.
///
/// Produced either by [`from_hex`](Self::from_hex) or by gradient
/// interpolation; channels are in range by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    #[inline]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a `#RRGGBB` string (case-insensitive digits).
    pub fn from_hex(hex: &str) -> crate::Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6 && d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| RenderError::InvalidHexColor(hex.to_string()))?;
        let packed = u32::from_str_radix(digits, 16)
            .map_err(|_| RenderError::InvalidHexColor(hex.to_string()))?;
        Ok(Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        })
    }

    /// Encode as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Linearly interpolate toward `other`, with each channel rounded to the
    /// nearest integer. `factor` must be in `[0, 1]`; the endpoints are
    /// reproduced exactly.
    pub fn lerp(self, other: Self, factor: f64) -> Self {
        let channel = |a: u8, b: u8| (a as f64 + factor * (b as f64 - a as f64)).round() as u8;
        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }

    /// The color as an opaque RGBA quadruple.
    #[inline]
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_colors() {
        assert_eq!(Color::from_hex("#FFFFFF").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#000000").unwrap(), Color::BLACK);
        assert_eq!(Color::from_hex("#808080").unwrap(), Color::new(128, 128, 128));
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn encode_is_uppercase_and_padded() {
        assert_eq!(Color::new(255, 128, 0).to_hex(), "#FF8000");
        assert_eq!(Color::new(0, 7, 100).to_hex(), "#000764");
        assert_eq!(Color::BLACK.to_hex(), "#000000");
    }

    #[test]
    fn hex_round_trip() {
        // Sample the channel space rather than sweeping all 2²⁴ triples.
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let c = Color::new(r as u8, g as u8, b as u8);
                    assert_eq!(Color::from_hex(&c.to_hex()).unwrap(), c);
                }
            }
        }
    }

    #[test]
    fn malformed_hex_is_rejected() {
        for bad in ["FFFFFF", "#FFF", "#GGGGGG", "#FFFFFFF", "", "#", "#+FFFFF"] {
            assert!(Color::from_hex(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = Color::new(10, 200, 37);
        let b = Color::new(250, 3, 99);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint_rounds() {
        let c = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(c, Color::new(128, 128, 128));
    }
}
