//! This module contains a struct, [`Coord`](coord::Coord), that models a point in a 3D coordinate
//! space. Every color triple in this crate projects onto a `Coord`, which is what lets the bounds
//! checking and the linear conversions out of RGB be written once instead of per color type.

use rulinalg::matrix::Matrix;
use rulinalg::vector::Vector;

/// A point in 3D space. `Coord` has three axes, denoted `x`, `y`, and `z`, and any color that
/// converts to a `Coord` matches its components with these axes in the order of the letters in its
/// name: an `RGBColor` puts `r` on the x-axis, `g` on the y-axis and `b` on the z-axis.
///
/// # Example
/// ```
/// # use colorgen::coord::Coord;
/// let point = Coord::from((0.25, 0.5, 1.0));
/// assert_eq!(point.components(), [0.25, 0.5, 1.0]);
/// let (x, y, z): (f64, f64, f64) = point.into();
/// assert_eq!((x, y, z), (0.25, 0.5, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Coord {
    /// The first axis.
    pub x: f64,
    /// The second axis.
    pub y: f64,
    /// The third axis.
    pub z: f64,
}

impl Coord {
    /// The three components in axis order.
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Applies a 3x3 linear transformation, treating this point as a column vector. Row `i` of the
    /// matrix produces axis `i` of the result.
    pub fn transform(&self, mat: &Matrix<f64>) -> Coord {
        let column = Vector::new(vec![self.x, self.y, self.z]);
        let out = mat * column;
        Coord {
            x: out[0],
            y: out[1],
            z: out[2],
        }
    }

    /// The Euclidean distance between two points. For colors this is a distance in the projection,
    /// not a perceptual difference: two HSV points with hues 0 and 1 are the same color.
    pub fn euclidean_distance(&self, other: &Coord) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2) + (self.z - other.z).powi(2))
            .sqrt()
    }
}

impl From<(f64, f64, f64)> for Coord {
    fn from(tup: (f64, f64, f64)) -> Coord {
        Coord {
            x: tup.0,
            y: tup.1,
            z: tup.2,
        }
    }
}

impl From<Coord> for (f64, f64, f64) {
    fn from(c: Coord) -> (f64, f64, f64) {
        (c.x, c.y, c.z)
    }
}
