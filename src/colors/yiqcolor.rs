//! YIQ, the luma/chroma encoding used by analog NTSC television. Y is the luma; I and Q are signed
//! chroma axes, so a saturated color can easily have negative I or Q. This type is therefore not
//! bounded the way RGB and HSV are.

use colors::RGBColor;
use consts::YIQ_TRANSFORM_MAT;
use coord::Coord;

/// A color in YIQ. Converted from an [`RGBColor`](../rgbcolor/struct.RGBColor.html) by a fixed
/// linear transform.
/// # Example
/// ```
/// # use colorgen::colors::{RGBColor, YIQColor};
/// let blue = RGBColor{r: 0.0, g: 0.0, b: 1.0};
/// let yiq = YIQColor::from(blue);
/// assert!((yiq.y - 0.114).abs() <= 1e-10);
/// assert!(yiq.i < 0.0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct YIQColor {
    /// Luma.
    pub y: f64,
    /// In-phase chroma, roughly orange to blue.
    pub i: f64,
    /// Quadrature chroma, roughly purple to green.
    pub q: f64,
}

impl From<RGBColor> for YIQColor {
    fn from(rgb: RGBColor) -> YIQColor {
        let point: Coord = rgb.into();
        point.transform(&YIQ_TRANSFORM_MAT).into()
    }
}

impl From<Coord> for YIQColor {
    fn from(c: Coord) -> YIQColor {
        YIQColor {
            y: c.x,
            i: c.y,
            q: c.z,
        }
    }
}

impl From<YIQColor> for Coord {
    fn from(c: YIQColor) -> Coord {
        Coord {
            x: c.y,
            y: c.i,
            z: c.q,
        }
    }
}

impl From<YIQColor> for (f64, f64, f64) {
    fn from(c: YIQColor) -> (f64, f64, f64) {
        (c.y, c.i, c.q)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_yiq_conversion() {
        let rgb = RGBColor {
            r: 0.98,
            g: 0.6468,
            b: 0.147,
        };
        let yiq = YIQColor::from(rgb);
        let y = 0.299 * 0.98 + 0.587 * 0.6468 + 0.114 * 0.147;
        let i = 0.596 * 0.98 - 0.275 * 0.6468 - 0.321 * 0.147;
        let q = 0.212 * 0.98 - 0.523 * 0.6468 + 0.311 * 0.147;
        assert!((yiq.y - y).abs() <= 1e-12);
        assert!((yiq.i - i).abs() <= 1e-12);
        assert!((yiq.q - q).abs() <= 1e-12);
    }

    #[test]
    fn test_gray_has_no_chroma() {
        let gray = RGBColor {
            r: 0.5,
            g: 0.5,
            b: 0.5,
        };
        let yiq = YIQColor::from(gray);
        assert!((yiq.y - 0.5).abs() <= 1e-12);
        assert!(yiq.i.abs() <= 1e-12);
        assert!(yiq.q.abs() <= 1e-12);
    }

    #[test]
    fn test_saturated_colors_leave_unit_range() {
        // these are valid colors, and must not be rejected for negative chroma
        let blue = YIQColor::from(RGBColor {
            r: 0.0,
            g: 0.0,
            b: 1.0,
        });
        assert!((blue.i + 0.321).abs() <= 1e-12);
        let green = YIQColor::from(RGBColor {
            r: 0.0,
            g: 1.0,
            b: 0.0,
        });
        assert!((green.q + 0.523).abs() <= 1e-12);
    }
}
