//! This module describes the Bound trait, which allows for a description of what values a color
//! representation supports. HSV and RGB both live in the unit cube, so any component outside of
//! [0, 1] is a bug in whatever produced it, not a color. YIQ and XYZ are deliberately not bounded:
//! the chroma axes of YIQ go negative for perfectly ordinary colors.

use std::error::Error;
use std::fmt;

use coord::Coord;

/// The error given when a bounded color has a component out of range. This covers NaN as well,
/// which compares as out of every range.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InvalidStateError {
    /// The name of the offending component, like `"h"` or `"g"`.
    pub component: &'static str,
    /// The value it held.
    pub value: f64,
    /// The inclusive range it should have been in.
    pub bounds: (f64, f64),
}

impl fmt::Display for InvalidStateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "invalid color state: {} = {} is outside [{}, {}]",
            self.component, self.value, self.bounds.0, self.bounds.1
        )
    }
}

impl Error for InvalidStateError {}

/// Describes a color representation whose components have explicit bounds. Only colors that can be
/// embedded in 3D space apply, hence the `Into<Coord>` requirement.
/// # Example
/// ```
/// # use colorgen::prelude::*;
/// let fine = RGBColor{r: 0.1, g: 0.5, b: 1.0};
/// assert!(fine.check_bounds().is_ok());
/// let broken = RGBColor{r: 0.1, g: -0.2, b: 1.0};
/// let err = broken.check_bounds().unwrap_err();
/// assert_eq!(err.component, "g");
/// ```
pub trait Bound: Into<Coord> + Copy {
    /// Returns an array [(min1, max1), (min2, max2), (min3, max3)] that represents the bounds on each
    /// component, in the order that they appear in the Coord representation.
    fn bounds() -> [(f64, f64); 3];

    /// The names of the components, in Coord order. Used for error reporting.
    fn component_names() -> [&'static str; 3];

    /// Checks every component against its bounds, inclusive at both ends, returning the color
    /// unchanged if all of them pass and the first failing component otherwise.
    fn check_bounds(self) -> Result<Self, InvalidStateError> {
        let ranges = Self::bounds();
        let names = Self::component_names();
        let point: Coord = self.into();
        for (i, &component) in point.components().iter().enumerate() {
            let (min, max) = ranges[i];
            // written this way round so NaN fails
            if !(min <= component && component <= max) {
                let err = InvalidStateError {
                    component: names[i],
                    value: component,
                    bounds: ranges[i],
                };
                debug!("{}", err);
                return Err(err);
            }
        }
        Ok(self)
    }
}
