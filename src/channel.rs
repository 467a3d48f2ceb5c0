//! This file handles the loosely-typed input of the RGB to HSV classifier. A single channel can be
//! given as a number, either a float in [0, 1] or an 8-bit value up to 255, or as a string of one
//! or two hex digits such as `"FA"` or `"7"`. Both end up as a [`Channel`](enum.Channel.html), which
//! is normalized the same way regardless of where it came from.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use num::ToPrimitive;
use regex::Regex;

use consts::CHANNEL_SCALE;

lazy_static! {
    static ref HEX_CHANNEL: Regex = Regex::new(r"^[0-9A-Fa-f]{1,2}$").unwrap();
}

/// An error in reading a channel for the classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidArgumentError {
    /// A number that is not finite, or that can't be represented as a float at all.
    NonNumeric,
    /// A number outside of [0, 255].
    OutOfRange(f64),
    /// A string that is not one or two hex digits.
    InvalidHex(String),
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            InvalidArgumentError::NonNumeric => write!(f, "channel is not numeric"),
            InvalidArgumentError::OutOfRange(val) => {
                write!(f, "channel {} is outside of [0, 255]", val)
            }
            InvalidArgumentError::InvalidHex(ref s) => {
                write!(f, "channel {:?} is not one or two hex digits", s)
            }
        }
    }
}

impl Error for InvalidArgumentError {}

/// One RGB channel, tagged by where it came from.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub enum Channel {
    /// A number in [0, 255]. Values up to 1 are fractions, anything larger is an 8-bit value.
    Numeric(f64),
    /// A value parsed from hex digits.
    Hex(u8),
}

impl Channel {
    /// Builds a numeric channel from any primitive number.
    /// # Errors
    /// `NonNumeric` if the number is NaN or infinite, `OutOfRange` if it is negative or above 255.
    /// # Example
    /// ```
    /// # use colorgen::channel::Channel;
    /// assert_eq!(Channel::numeric(128u16), Ok(Channel::Numeric(128.0)));
    /// assert!(Channel::numeric(-1).is_err());
    /// ```
    pub fn numeric<T: ToPrimitive>(val: T) -> Result<Channel, InvalidArgumentError> {
        let val = match val.to_f64() {
            Some(v) if v.is_finite() => v,
            _ => return Err(InvalidArgumentError::NonNumeric),
        };
        if val < 0.0 || val > 255.0 {
            Err(InvalidArgumentError::OutOfRange(val))
        } else {
            Ok(Channel::Numeric(val))
        }
    }

    /// The raw value, before any normalization.
    pub fn value(&self) -> f64 {
        match *self {
            Channel::Numeric(v) => v,
            Channel::Hex(v) => f64::from(v),
        }
    }

    /// The value as a fraction. Anything above 1 is taken as an 8-bit channel and divided by 256,
    /// so a hex `"01"` is a full channel while `"02"` is 2/256.
    pub fn normalized(&self) -> f64 {
        let v = self.value();
        if v > 1.0 {
            v / CHANNEL_SCALE
        } else {
            v
        }
    }
}

impl FromStr for Channel {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Channel, InvalidArgumentError> {
        if !HEX_CHANNEL.is_match(s) {
            return Err(InvalidArgumentError::InvalidHex(s.to_string()));
        }
        u8::from_str_radix(s, 16)
            .map(Channel::Hex)
            .map_err(|_| InvalidArgumentError::InvalidHex(s.to_string()))
    }
}

/// Anything that can be read as a [`Channel`](enum.Channel.html). Implemented for the primitive
/// numbers, for hex strings, and for `Channel` itself.
pub trait IntoChannel {
    /// Performs the conversion.
    fn into_channel(self) -> Result<Channel, InvalidArgumentError>;
}

impl IntoChannel for Channel {
    fn into_channel(self) -> Result<Channel, InvalidArgumentError> {
        Ok(self)
    }
}

impl<'a> IntoChannel for &'a str {
    fn into_channel(self) -> Result<Channel, InvalidArgumentError> {
        self.parse()
    }
}

impl IntoChannel for String {
    fn into_channel(self) -> Result<Channel, InvalidArgumentError> {
        self.parse()
    }
}

macro_rules! numeric_channel {
    ($($t:ty),*) => {
        $(
            impl IntoChannel for $t {
                fn into_channel(self) -> Result<Channel, InvalidArgumentError> {
                    Channel::numeric(self)
                }
            }
        )*
    };
}

numeric_channel!(f32, f64, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
