//! A point in the CIE 1931 XYZ color space, computed from RGB by the standard D65 matrix. No gamma
//! decoding is done first: the RGB primaries are taken as linear.

use colors::RGBColor;
use consts::XYZ_TRANSFORM_MAT;
use coord::Coord;

/// A color in CIE 1931 XYZ, with Y normalized so that RGB white has a luminance of 1.
/// # Example
/// ```
/// # use colorgen::colors::{RGBColor, XYZColor};
/// let white = XYZColor::from(RGBColor{r: 1.0, g: 1.0, b: 1.0});
/// assert!((white.y - 1.0).abs() <= 1e-10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct XYZColor {
    /// The X tristimulus value.
    pub x: f64,
    /// The Y tristimulus value, or luminance.
    pub y: f64,
    /// The Z tristimulus value.
    pub z: f64,
}

impl From<RGBColor> for XYZColor {
    fn from(rgb: RGBColor) -> XYZColor {
        let point: Coord = rgb.into();
        point.transform(&XYZ_TRANSFORM_MAT).into()
    }
}

impl From<Coord> for XYZColor {
    fn from(c: Coord) -> XYZColor {
        XYZColor {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for Coord {
    fn from(c: XYZColor) -> Coord {
        Coord {
            x: c.x,
            y: c.y,
            z: c.z,
        }
    }
}

impl From<XYZColor> for (f64, f64, f64) {
    fn from(c: XYZColor) -> (f64, f64, f64) {
        (c.x, c.y, c.z)
    }
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_xyz_conversion() {
        let rgb = RGBColor {
            r: 0.40373,
            g: 0.147,
            b: 0.98,
        };
        let xyz = XYZColor::from(rgb);
        let x = 0.412453 * 0.40373 + 0.357580 * 0.147 + 0.180423 * 0.98;
        let y = 0.212671 * 0.40373 + 0.715160 * 0.147 + 0.072169 * 0.98;
        let z = 0.019334 * 0.40373 + 0.119193 * 0.147 + 0.950227 * 0.98;
        assert!((xyz.x - x).abs() <= 1e-12);
        assert!((xyz.y - y).abs() <= 1e-12);
        assert!((xyz.z - z).abs() <= 1e-12);
    }

    #[test]
    fn test_black_and_white() {
        let black = XYZColor::from(RGBColor {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        });
        assert_eq!(<(f64, f64, f64)>::from(black), (0.0, 0.0, 0.0));
        let white = XYZColor::from(RGBColor {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        });
        // D65 white point
        assert!((white.x - 0.950456).abs() <= 1e-10);
        assert!((white.y - 1.0).abs() <= 1e-10);
        assert!((white.z - 1.088754).abs() <= 1e-10);
    }
}
