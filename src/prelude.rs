//! This module brings the most common colorgen functionality under a single namespace, to prevent
//! excessive imports: the [`ColorState`] generator, the [`Bound`] trait, the channel input types,
//! the classifier and every color triple.
//!
//! [`ColorState`]: ../generator/struct.ColorState.html
//! [`Bound`]: ../bound/trait.Bound.html

pub use bound::{Bound, InvalidStateError};
pub use channel::{Channel, IntoChannel, InvalidArgumentError};
pub use colors::{rgb_to_hsv, HSVColor, HueFormula, RGBColor, XYZColor, YIQColor};
pub use generator::ColorState;
