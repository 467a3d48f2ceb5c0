//! This module implements the HSV color space with every component, hue included, running from 0
//! to 1. A hue of 1 is a full turn and so the same as a hue of 0. HSV is a simple hexagonal
//! transformation of RGB: hue picks a side of the hexagon, and there are no trig functions
//! involved in either direction.
//!
//! The module also holds the RGB to HSV classifier, [`rgb_to_hsv`](fn.rgb_to_hsv.html), which
//! takes loosely-typed channels (floats, 8-bit integers or hex digits) and keeps the exact hue
//! rounding of the palettes that were generated with it.

use bound::{Bound, InvalidStateError};
use channel::{Channel, IntoChannel, InvalidArgumentError};
use colors::RGBColor;
use coord::Coord;

/// An HSV color, with hue as a fraction of a full turn.
/// # Example
/// ```
/// # use colorgen::colors::HSVColor;
/// let orange = HSVColor{h: 0.1, s: 0.85, v: 0.98};
/// let rgb = orange.to_rgb().unwrap();
/// assert_eq!(rgb.to_html_color(), "FAA525");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct HSVColor {
    /// The hue, between 0 and 1. Multiply by 360 for degrees.
    pub h: f64,
    /// The saturation, the distance from the equivalent-value gray. Between 0 and 1.
    pub s: f64,
    /// The value, the largest RGB primary of the color. Between 0 and 1.
    pub v: f64,
}

impl HSVColor {
    /// Converts to RGB. The hue is split into six sectors, one per side of the hexagon; a hue of
    /// exactly 1 falls back into the first sector, so it gives the same color as a hue of 0.
    /// # Errors
    /// Returns an `InvalidStateError` if this color is out of bounds, or if the result somehow is.
    pub fn to_rgb(&self) -> Result<RGBColor, InvalidStateError> {
        let hsv = self.check_bounds()?;
        let (h, s, v) = (hsv.h, hsv.s, hsv.v);

        let sector = (h * 6.0).floor();
        let f = h * 6.0 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        // bounds checking above keeps sector in 0..=6, and 6 only for h == 1
        let (r, g, b) = match (sector as u8) % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        RGBColor { r, g, b }.check_bounds()
    }
}

impl From<HSVColor> for Coord {
    fn from(c: HSVColor) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.v,
        }
    }
}

impl From<Coord> for HSVColor {
    fn from(c: Coord) -> HSVColor {
        HSVColor {
            h: c.x,
            s: c.y,
            v: c.z,
        }
    }
}

impl From<HSVColor> for (f64, f64, f64) {
    fn from(c: HSVColor) -> (f64, f64, f64) {
        (c.h, c.s, c.v)
    }
}

impl Bound for HSVColor {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }

    fn component_names() -> [&'static str; 3] {
        ["h", "s", "v"]
    }
}

/// How [`rgb_to_hsv_with`](fn.rgb_to_hsv_with.html) turns the position within a hue sector into a
/// hue.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HueFormula {
    /// Truncate the in-sector offset to an integer before adding the sector offset. Every hue
    /// snaps to a multiple of 1/6. This is what existing palettes were computed with, so it is the
    /// default.
    Truncated,
    /// The textbook formula, which keeps the fractional offset.
    Standard,
}

impl Default for HueFormula {
    fn default() -> HueFormula {
        HueFormula::Truncated
    }
}

impl HueFormula {
    fn offset(&self, x: f64) -> f64 {
        match *self {
            HueFormula::Truncated => x.trunc(),
            HueFormula::Standard => x,
        }
    }
}

/// Classifies an RGB color as HSV using [`HueFormula::Truncated`](enum.HueFormula.html). See
/// [`rgb_to_hsv_with`](fn.rgb_to_hsv_with.html) for how channels are read.
/// # Example
/// ```
/// # use colorgen::rgb_to_hsv;
/// let hsv = rgb_to_hsv("FF", "00", "00").unwrap();
/// assert_eq!(hsv.h, 0.0);
/// assert_eq!(hsv.s, 1.0);
/// assert_eq!(hsv.v, 255.0 / 256.0);
/// ```
pub fn rgb_to_hsv<R, G, B>(r: R, g: G, b: B) -> Result<HSVColor, InvalidArgumentError>
where
    R: IntoChannel,
    G: IntoChannel,
    B: IntoChannel,
{
    rgb_to_hsv_with(HueFormula::default(), r, g, b)
}

/// Classifies an RGB color as HSV. Each channel may be a float, an integer or a string of one or
/// two hex digits; anything above 1 is read as an 8-bit channel and divided by 256.
///
/// When more than one channel ties for the maximum, blue takes precedence over green and green over
/// red. Gray has no hue and is given a hue of 0.
/// # Errors
/// Returns an `InvalidArgumentError` if a channel is not a finite number in [0, 255] or not valid
/// hex.
/// # Example
/// ```
/// # use colorgen::colors::{rgb_to_hsv_with, HueFormula};
/// let truncated = rgb_to_hsv_with(HueFormula::Truncated, 255, 128, 0).unwrap();
/// let standard = rgb_to_hsv_with(HueFormula::Standard, 255, 128, 0).unwrap();
/// assert_eq!(truncated.h, 0.0);
/// assert!((standard.h - 128.0 / 255.0 / 6.0).abs() <= 1e-10);
/// ```
pub fn rgb_to_hsv_with<R, G, B>(
    formula: HueFormula,
    r: R,
    g: G,
    b: B,
) -> Result<HSVColor, InvalidArgumentError>
where
    R: IntoChannel,
    G: IntoChannel,
    B: IntoChannel,
{
    let channels: [Channel; 3] = [r.into_channel()?, g.into_channel()?, b.into_channel()?];
    trace!("classifying {:?} with {:?}", channels, formula);
    let r = channels[0].normalized();
    let g = channels[1].normalized();
    let b = channels[2].normalized();

    let c_max = r.max(g).max(b);
    let c_min = r.min(g).min(b);
    let delta = c_max - c_min;

    let h = if delta == 0.0 {
        0.0
    } else if c_max == b {
        (formula.offset((r - g) / delta) + 4.0) / 6.0
    } else if c_max == g {
        (formula.offset((b - r) / delta) + 2.0) / 6.0
    } else {
        // truncation and rem_euclid both keep the sign of -0.0
        formula.offset((g - b) / delta).rem_euclid(6.0) / 6.0 + 0.0
    };
    let s = if c_max == 0.0 { 0.0 } else { delta / c_max };

    Ok(HSVColor { h, s, v: c_max })
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_hsv_rgb_sectors() {
        // one pure color per sector boundary
        let expected = [
            (0.0, (1.0, 0.0, 0.0)),
            (1.0 / 6.0, (1.0, 1.0, 0.0)),
            (2.0 / 6.0, (0.0, 1.0, 0.0)),
            (3.0 / 6.0, (0.0, 1.0, 1.0)),
            (4.0 / 6.0, (0.0, 0.0, 1.0)),
            (5.0 / 6.0, (1.0, 0.0, 1.0)),
        ];
        for &(h, (r, g, b)) in expected.iter() {
            let rgb = HSVColor { h, s: 1.0, v: 1.0 }.to_rgb().unwrap();
            assert!(approx_eq!(f64, rgb.r, r, epsilon = 1e-10), "h = {}", h);
            assert!(approx_eq!(f64, rgb.g, g, epsilon = 1e-10), "h = {}", h);
            assert!(approx_eq!(f64, rgb.b, b, epsilon = 1e-10), "h = {}", h);
        }
    }

    #[test]
    fn test_default_color_to_rgb() {
        let rgb = HSVColor {
            h: 0.1,
            s: 0.85,
            v: 0.98,
        }
        .to_rgb()
        .unwrap();
        assert!(approx_eq!(f64, rgb.r, 0.98, epsilon = 1e-12));
        assert!(approx_eq!(f64, rgb.g, 0.6468, epsilon = 1e-12));
        assert!(approx_eq!(f64, rgb.b, 0.147, epsilon = 1e-12));
    }

    #[test]
    fn test_full_hue_wraps() {
        let at_one = HSVColor {
            h: 1.0,
            s: 0.6,
            v: 0.7,
        };
        let at_zero = HSVColor { h: 0.0, ..at_one };
        assert_eq!(at_one.to_rgb().unwrap(), at_zero.to_rgb().unwrap());
    }

    #[test]
    fn test_out_of_bounds_hsv() {
        let bad = HSVColor {
            h: 0.2,
            s: 1.2,
            v: 0.5,
        };
        assert_eq!(bad.to_rgb().unwrap_err().component, "s");
    }

    #[test]
    fn test_rgb_to_hsv_reference_output() {
        let hsv = rgb_to_hsv(0.1, 0.85, 0.98).unwrap();
        // blue is the max, and (r - g) / delta truncates to 0
        assert_eq!(hsv.h, 4.0 / 6.0);
        assert!(approx_eq!(f64, hsv.s, 0.88 / 0.98, epsilon = 1e-12));
        assert_eq!(hsv.v, 0.98);
    }

    #[test]
    fn test_rgb_to_hsv_standard_formula() {
        let hsv = rgb_to_hsv_with(HueFormula::Standard, 0.1, 0.85, 0.98).unwrap();
        let expected = ((0.1 - 0.85) / (0.98 - 0.1) + 4.0) / 6.0;
        assert!(approx_eq!(f64, hsv.h, expected, epsilon = 1e-12));
        // standard is the inverse of to_rgb
        let round_trip = HSVColor {
            h: 0.3,
            s: 0.5,
            v: 0.8,
        }
        .to_rgb()
        .unwrap();
        let back = rgb_to_hsv_with(HueFormula::Standard, round_trip.r, round_trip.g, round_trip.b)
            .unwrap();
        assert!(approx_eq!(f64, back.h, 0.3, epsilon = 1e-10));
        assert!(approx_eq!(f64, back.s, 0.5, epsilon = 1e-10));
        assert!(approx_eq!(f64, back.v, 0.8, epsilon = 1e-10));
    }

    #[test]
    fn test_rgb_to_hsv_hex_and_bytes() {
        let from_hex = rgb_to_hsv("FA", "a5", "25").unwrap();
        let from_bytes = rgb_to_hsv(250u8, 165u8, 37u8).unwrap();
        assert_eq!(from_hex, from_bytes);
        assert_eq!(from_hex.v, 250.0 / 256.0);
        // red is the max and (g - b) / delta truncates to 0
        assert_eq!(from_hex.h, 0.0);
    }

    #[test]
    fn test_rgb_to_hsv_gray_and_black() {
        let gray = rgb_to_hsv(0.5, 0.5, 0.5).unwrap();
        assert_eq!((gray.h, gray.s, gray.v), (0.0, 0.0, 0.5));
        let black = rgb_to_hsv(0, 0, 0).unwrap();
        assert_eq!((black.h, black.s, black.v), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_rgb_to_hsv_tie_precedence() {
        // red and blue tie: blue wins, giving magenta in the blue sector
        let magenta = rgb_to_hsv(1.0, 0.0, 1.0).unwrap();
        assert_eq!(magenta.h, 5.0 / 6.0);
        // red and green tie: green wins
        let yellow = rgb_to_hsv(1.0, 1.0, 0.0).unwrap();
        assert_eq!(yellow.h, 1.0 / 6.0);
    }

    #[test]
    fn test_rgb_to_hsv_red_hue_is_positive_zero() {
        // (g - b) / delta = -0.5, which truncates to -0.0
        let pink = rgb_to_hsv(1.0, 0.0, 0.5).unwrap();
        assert_eq!(pink.h.to_bits(), 0f64.to_bits());
        assert!(pink.h.is_sign_positive());
        assert_eq!((pink.s, pink.v), (1.0, 1.0));
    }

    #[test]
    fn test_rgb_to_hsv_invalid_channels() {
        assert_eq!(
            rgb_to_hsv("zz", 0, 0),
            Err(InvalidArgumentError::InvalidHex("zz".to_string()))
        );
        assert_eq!(
            rgb_to_hsv(0, ::std::f64::NAN, 0),
            Err(InvalidArgumentError::NonNumeric)
        );
        assert_eq!(
            rgb_to_hsv(0, 0, 300),
            Err(InvalidArgumentError::OutOfRange(300.0))
        );
    }
}
