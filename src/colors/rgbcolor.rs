//! This module implements the RGB triple that every other view in this crate is derived from, along
//! with its HTML hex string form. Components are floats between 0 and 1, not 8-bit integers.

use bound::Bound;
use coord::Coord;

/// An RGB color with each primary between 0 and 1.
/// # Example
/// ```
/// # use colorgen::colors::RGBColor;
/// let orange = RGBColor{r: 0.98, g: 0.6468, b: 0.147};
/// assert_eq!(orange.to_html_color(), "FAA525");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RGBColor {
    /// The red primary.
    pub r: f64,
    /// The green primary.
    pub g: f64,
    /// The blue primary.
    pub b: f64,
}

/// Scales a primary to a byte by flooring `component * 256`. A primary of exactly 1.0 would give
/// 256, so the result is capped at 255 to keep every channel to two hex digits.
fn to_byte(component: f64) -> u8 {
    let scaled = (component * 256.0).floor();
    if scaled >= 255.0 {
        255
    } else if scaled <= 0.0 {
        0
    } else {
        scaled as u8
    }
}

impl RGBColor {
    /// Formats the color as six uppercase hex digits in R, G, B order, with no leading `#`. Each
    /// channel is `floor(component * 256)`, capped at `FF`.
    /// # Example
    /// ```
    /// # use colorgen::colors::RGBColor;
    /// let white = RGBColor{r: 1.0, g: 1.0, b: 1.0};
    /// assert_eq!(white.to_html_color(), "FFFFFF");
    /// ```
    pub fn to_html_color(&self) -> String {
        format!(
            "{:02X}{:02X}{:02X}",
            to_byte(self.r),
            to_byte(self.g),
            to_byte(self.b)
        )
    }
}

impl From<RGBColor> for Coord {
    fn from(c: RGBColor) -> Coord {
        Coord {
            x: c.r,
            y: c.g,
            z: c.b,
        }
    }
}

impl From<Coord> for RGBColor {
    fn from(c: Coord) -> RGBColor {
        RGBColor {
            r: c.x,
            g: c.y,
            b: c.z,
        }
    }
}

impl From<RGBColor> for (f64, f64, f64) {
    fn from(c: RGBColor) -> (f64, f64, f64) {
        (c.r, c.g, c.b)
    }
}

impl Bound for RGBColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }

    fn component_names() -> [&'static str; 3] {
        ["r", "g", "b"]
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_html_color() {
        let orange = RGBColor {
            r: 0.98,
            g: 0.6468,
            b: 0.147,
        };
        assert_eq!(orange.to_html_color(), "FAA525");
        let violet = RGBColor {
            r: 0.40373,
            g: 0.147,
            b: 0.98,
        };
        assert_eq!(violet.to_html_color(), "6725FA");
    }

    #[test]
    fn test_html_color_padding() {
        // small channels still take two digits
        let dark = RGBColor {
            r: 0.0,
            g: 0.01,
            b: 0.05,
        };
        assert_eq!(dark.to_html_color(), "00020C");
    }

    #[test]
    fn test_html_color_full_channel() {
        // 1.0 * 256 would be "100", which breaks the six-digit format
        let red = RGBColor {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        };
        assert_eq!(red.to_html_color(), "FF0000");
        assert_eq!(red.to_html_color().len(), 6);
    }

    #[test]
    fn test_coord_round_trip() {
        let color = RGBColor {
            r: 0.25,
            g: 0.5,
            b: 0.75,
        };
        let point: Coord = color.into();
        assert_eq!(RGBColor::from(point), color);
        assert_eq!(<(f64, f64, f64)>::from(color), (0.25, 0.5, 0.75));
    }
}
