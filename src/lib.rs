//! Colorgen generates colors that are easy to tell apart. It keeps a single HSV color and steps its
//! hue by the golden ratio conjugate, modulo 1: the resulting sequence of hues never repeats and
//! never bunches up, so the first handful of colors are as distinct as a handful of hues can be.
//! The current color can be read back as HSV, RGB, an HTML hex string, YIQ or CIE XYZ, and there
//! is a classifier for going from loosely-typed RGB channels back to HSV.
//!
//! ```
//! use colorgen::ColorState;
//!
//! let mut color = ColorState::default();
//! let mut html = vec![];
//! for _ in 0..3 {
//!     html.push(color.to_html_color().unwrap());
//!     color.advance(1).unwrap();
//! }
//! assert_eq!(&html[..2], &["FAA525", "6725FA"]);
//! ```

#![doc(html_root_url = "https://docs.rs/colorgen/0.1.0")]
// we don't mess around with documentation
#![deny(missing_docs)]
// Clippy doesn't like long decimals, but adding separators in decimals isn't any more readable
#![allow(clippy::unreadable_literal)]

extern crate num;
extern crate regex;
#[macro_use]
extern crate rulinalg;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;

#[cfg(test)]
#[macro_use]
extern crate float_cmp;
#[cfg(test)]
extern crate serde_json;

pub mod bound;
pub mod channel;
pub mod colors;
mod consts;
pub mod coord;
pub mod generator;
pub mod prelude;

pub use colors::{rgb_to_hsv, rgb_to_hsv_with};
pub use consts::GOLDEN_RATIO_CONJUGATE;
pub use generator::{ColorState, Palette};
