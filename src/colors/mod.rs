//! This module contains the color triples that a [`ColorState`] can be viewed as. For convenience,
//! each main type is imported into this module's namespace directly.
//!
//! [`ColorState`]: ../generator/struct.ColorState.html
pub mod hsvcolor;
pub mod rgbcolor;
pub mod xyzcolor;
pub mod yiqcolor;

// for convenience, use this namespace for the color objects
pub use self::hsvcolor::{rgb_to_hsv, rgb_to_hsv_with, HSVColor, HueFormula};
pub use self::rgbcolor::RGBColor;
pub use self::xyzcolor::XYZColor;
pub use self::yiqcolor::YIQColor;
