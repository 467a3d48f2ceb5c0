//! This module implements [`ColorState`], an HSV color whose hue can be stepped forwards and
//! backwards by the golden ratio conjugate. Adding an irrational number to the hue modulo 1 never
//! repeats, and with 1/φ in particular each new hue lands in the largest gap left by the ones
//! before it, so any run of consecutive states gives colors that are about as far apart in hue as
//! possible. The approach comes from
//! <http://martin.ankerl.com/2009/12/09/how-to-create-random-colors-programmatically/>.
//!
//! [`ColorState`]: struct.ColorState.html

use std::convert::TryFrom;

use bound::{Bound, InvalidStateError};
use colors::{HSVColor, RGBColor, XYZColor, YIQColor};
use consts::{DEFAULT_HUE, DEFAULT_SATURATION, DEFAULT_VALUE, GOLDEN_RATIO_CONJUGATE};
use coord::Coord;

/// A point in HSV space that remembers where it is in the golden-ratio hue sequence. Only the hue
/// is ever stepped: saturation and value stay as they were constructed. Every view (`to_rgb`,
/// `to_html_color` and the rest) is computed fresh from the current state.
///
/// # Example
/// ```
/// # use colorgen::ColorState;
/// let mut color = ColorState::default();
/// assert_eq!(color.to_html_color().unwrap(), "FAA525");
/// color.advance(1).unwrap();
/// assert_eq!(color.to_html_color().unwrap(), "6725FA");
/// color.retreat(1).unwrap();
/// assert_eq!(color.to_html_color().unwrap(), "FAA525");
/// ```
///
/// Deserializing goes through [`HSVColor`](../colors/hsvcolor/struct.HSVColor.html) and is
/// rejected if any component is out of bounds. The hue is the running sum of every step, so a
/// format that rounds floats will not give back the same state: use one that round-trips `f64`
/// exactly (with `serde_json`, the `float_roundtrip` feature).
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HSVColor")]
pub struct ColorState {
    h: f64,
    s: f64,
    v: f64,
}

impl Default for ColorState {
    /// The defaults are a warm, nearly fully saturated orange.
    fn default() -> ColorState {
        ColorState {
            h: DEFAULT_HUE,
            s: DEFAULT_SATURATION,
            v: DEFAULT_VALUE,
        }
    }
}

impl ColorState {
    /// Creates a new state. Any component given as `None` takes its default: hue 0.1, saturation
    /// 0.85, value 0.98.
    /// # Errors
    /// Returns an `InvalidStateError` if any component is outside of [0, 1] or NaN.
    /// # Example
    /// ```
    /// # use colorgen::ColorState;
    /// let teal = ColorState::new(0.5, None, 0.6).unwrap();
    /// assert_eq!(teal.s(), 0.85);
    /// assert!(ColorState::new(1.5, None, None).is_err());
    /// ```
    pub fn new<H, S, V>(h: H, s: S, v: V) -> Result<ColorState, InvalidStateError>
    where
        H: Into<Option<f64>>,
        S: Into<Option<f64>>,
        V: Into<Option<f64>>,
    {
        ColorState {
            h: h.into().unwrap_or(DEFAULT_HUE),
            s: s.into().unwrap_or(DEFAULT_SATURATION),
            v: v.into().unwrap_or(DEFAULT_VALUE),
        }
        .check_bounds()
    }

    /// The hue, between 0 and 1.
    pub fn h(&self) -> f64 {
        self.h
    }

    /// The saturation, between 0 and 1.
    pub fn s(&self) -> f64 {
        self.s
    }

    /// The value, between 0 and 1.
    pub fn v(&self) -> f64 {
        self.v
    }

    /// Moves the hue forward `n` places in the sequence. A negative `n` moves backwards instead, and
    /// zero leaves the state untouched. Each place is its own addition modulo 1, so after many steps
    /// the hue carries the rounding of every step before it rather than being `n * 1/φ mod 1`.
    /// # Errors
    /// Returns an `InvalidStateError` if the state is out of bounds, in which case the hue is left
    /// as it was.
    pub fn advance(&mut self, n: i64) -> Result<&mut ColorState, InvalidStateError> {
        if n < 0 {
            self.step_backward(n.unsigned_abs())
        } else {
            self.step_forward(n as u64)
        }
    }

    /// The same as [`advance`](#method.advance).
    pub fn next_color(&mut self, n: i64) -> Result<&mut ColorState, InvalidStateError> {
        self.advance(n)
    }

    /// The same as [`advance`](#method.advance).
    pub fn advance_color(&mut self, n: i64) -> Result<&mut ColorState, InvalidStateError> {
        self.advance(n)
    }

    /// Moves the hue back `n` places, undoing [`advance`](#method.advance) up to rounding. A
    /// negative `n` moves forwards.
    /// # Errors
    /// As with `advance`.
    pub fn retreat(&mut self, n: i64) -> Result<&mut ColorState, InvalidStateError> {
        if n < 0 {
            self.step_forward(n.unsigned_abs())
        } else {
            self.step_backward(n as u64)
        }
    }

    /// The same as [`retreat`](#method.retreat).
    pub fn prev_color(&mut self, n: i64) -> Result<&mut ColorState, InvalidStateError> {
        self.retreat(n)
    }

    fn step_forward(&mut self, count: u64) -> Result<&mut ColorState, InvalidStateError> {
        if count == 0 {
            return Ok(self);
        }
        // fail before touching the hue, not after
        self.check_bounds()?;
        trace!("advancing hue {} by {} steps", self.h, count);
        for _ in 0..count {
            self.h = (self.h + GOLDEN_RATIO_CONJUGATE) % 1.0;
        }
        self.check_bounds()?;
        Ok(self)
    }

    fn step_backward(&mut self, count: u64) -> Result<&mut ColorState, InvalidStateError> {
        if count == 0 {
            return Ok(self);
        }
        // fail before touching the hue, not after
        self.check_bounds()?;
        trace!("retreating hue {} by {} steps", self.h, count);
        for _ in 0..count {
            self.h = (self.h + 1.0 - GOLDEN_RATIO_CONJUGATE) % 1.0;
        }
        self.check_bounds()?;
        Ok(self)
    }

    /// The current state as an HSV triple.
    /// # Errors
    /// Returns an `InvalidStateError` if the state is out of bounds.
    pub fn to_hsv(&self) -> Result<HSVColor, InvalidStateError> {
        let state = self.check_bounds()?;
        Ok(HSVColor {
            h: state.h,
            s: state.s,
            v: state.v,
        })
    }

    /// The current color in RGB, each primary between 0 and 1.
    /// # Errors
    /// Returns an `InvalidStateError` if the state is out of bounds.
    pub fn to_rgb(&self) -> Result<RGBColor, InvalidStateError> {
        self.to_hsv()?.to_rgb()
    }

    /// The current color as six uppercase hex digits, like `"FAA525"`, with no leading `#`.
    /// # Errors
    /// Returns an `InvalidStateError` if the state is out of bounds.
    pub fn to_html_color(&self) -> Result<String, InvalidStateError> {
        Ok(self.to_rgb()?.to_html_color())
    }

    /// The current color in YIQ. I and Q are signed, so they are not checked against [0, 1].
    /// # Errors
    /// Returns an `InvalidStateError` if the state is out of bounds.
    pub fn to_yiq(&self) -> Result<YIQColor, InvalidStateError> {
        Ok(YIQColor::from(self.to_rgb()?))
    }

    /// The current color in CIE 1931 XYZ.
    /// # Errors
    /// Returns an `InvalidStateError` if the state is out of bounds.
    pub fn to_xyz(&self) -> Result<XYZColor, InvalidStateError> {
        Ok(XYZColor::from(self.to_rgb()?))
    }

    /// An endless iterator over this state and every state after it in the sequence. `self` is not
    /// changed. Iteration stops early only if the state is out of bounds.
    /// # Example
    /// ```
    /// # use colorgen::ColorState;
    /// let colors: Vec<String> = ColorState::default()
    ///     .palette()
    ///     .take(3)
    ///     .map(|c| c.to_html_color().unwrap())
    ///     .collect();
    /// assert_eq!(colors[..2], ["FAA525".to_string(), "6725FA".to_string()]);
    /// ```
    pub fn palette(&self) -> Palette {
        Palette { next: *self }
    }
}

impl TryFrom<HSVColor> for ColorState {
    type Error = InvalidStateError;

    fn try_from(hsv: HSVColor) -> Result<ColorState, InvalidStateError> {
        ColorState::new(hsv.h, hsv.s, hsv.v)
    }
}

impl From<ColorState> for Coord {
    fn from(c: ColorState) -> Coord {
        Coord {
            x: c.h,
            y: c.s,
            z: c.v,
        }
    }
}

impl Bound for ColorState {
    fn bounds() -> [(f64, f64); 3] {
        [(0., 1.), (0., 1.), (0., 1.)]
    }

    fn component_names() -> [&'static str; 3] {
        ["h", "s", "v"]
    }
}

/// Iterator over successive golden-ratio steps, returned by
/// [`ColorState::palette`](struct.ColorState.html#method.palette).
#[derive(Debug, Clone)]
pub struct Palette {
    next: ColorState,
}

impl Iterator for Palette {
    type Item = ColorState;

    fn next(&mut self) -> Option<ColorState> {
        let current = self.next.check_bounds().ok()?;
        self.next.advance(1).ok()?;
        Some(current)
    }
}
