//! This file provides the constants used for hue stepping and color space conversion. The linear
//! conversions out of RGB are kept as matrices instead of written-out sums so that the coefficients
//! can be checked against their published tables row by row.

use rulinalg::matrix::Matrix;

/// The fractional part of the golden ratio, 1/φ. Repeatedly adding this to a hue modulo 1 spreads
/// the hues out as evenly as any sequence can, which is what makes successive colors distinct.
pub const GOLDEN_RATIO_CONJUGATE: f64 = 0.6180339887498953;

/// Hue used when a [`ColorState`](../generator/struct.ColorState.html) is built without one.
pub const DEFAULT_HUE: f64 = 0.1;
/// Saturation used when none is given.
pub const DEFAULT_SATURATION: f64 = 0.85;
/// Value used when none is given.
pub const DEFAULT_VALUE: f64 = 0.98;

/// Channels above 1.0 are treated as 8-bit values and divided by this. Note that this is 256, not
/// 255, so a full channel of 255 normalizes to just under 1.
pub const CHANNEL_SCALE: f64 = 256.0;

lazy_static! {
    /// RGB to YIQ, rows are Y, I, Q. Source: the NTSC coefficients as listed at
    /// http://www.cs.rit.edu/~ncs/color/t_convert.html
    pub static ref YIQ_TRANSFORM_MAT: Matrix<f64> = matrix![
        0.299, 0.587, 0.114;
        0.596, -0.275, -0.321;
        0.212, -0.523, 0.311
    ];

    /// Linear RGB to CIE 1931 XYZ under D65, rows are X, Y, Z.
    pub static ref XYZ_TRANSFORM_MAT: Matrix<f64> = matrix![
        0.412453, 0.357580, 0.180423;
        0.212671, 0.715160, 0.072169;
        0.019334, 0.119193, 0.950227
    ];
}
