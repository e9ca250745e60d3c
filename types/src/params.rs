//! Slider-driven scalar parameters.
//!
//! Every parameter is owned by exactly one range control. The control reports
//! an integer position in `0..=100`, which is scaled onto the parameter's
//! domain here so the rest of the system only ever sees domain values.

use serde::Deserialize;
use thiserror::Error;

/// One of the four user-adjustable scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Position of the point, `x` in `[0, 10]`.
    X,
    /// Slope `m` in `[0, 2]`.
    Slope,
    /// Uncertainty on `x`, in `[0, 2]`.
    XError,
    /// Uncertainty on the slope, in `[0, 1]`.
    SlopeError,
}

impl Parameter {
    pub const ALL: [Parameter; 4] = [
        Parameter::X,
        Parameter::Slope,
        Parameter::XError,
        Parameter::SlopeError,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Parameter::X => 0,
            Parameter::Slope => 1,
            Parameter::XError => 2,
            Parameter::SlopeError => 3,
        }
    }

    /// Upper end of the domain; the lower end is always zero.
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Parameter::X => 10.0,
            Parameter::Slope | Parameter::XError => 2.0,
            Parameter::SlopeError => 1.0,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Parameter::X => "x",
            Parameter::Slope => "slope m",
            Parameter::XError => "uncertainty on x",
            Parameter::SlopeError => "uncertainty on slope",
        }
    }

    /// Scale a slider position onto this parameter's domain.
    #[must_use]
    pub fn value_at(self, position: SliderPosition) -> f64 {
        let raw = f64::from(position.get());
        match self {
            Parameter::X => raw / 10.0,
            _ => self.max() * (raw / 100.0),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("slider position {0} is outside 0..={max}", max = SliderPosition::MAX)]
pub struct SliderRangeError(pub u16);

/// Integer slider position, guaranteed to lie in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "u16")]
pub struct SliderPosition(u8);

impl SliderPosition {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(position: u16) -> Result<Self, SliderRangeError> {
        if position > u16::from(Self::MAX) {
            return Err(SliderRangeError(position));
        }
        Ok(Self(position as u8))
    }

    #[must_use]
    pub const fn min() -> Self {
        Self(Self::MIN)
    }

    #[must_use]
    pub const fn max() -> Self {
        Self(Self::MAX)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Move by `delta` steps, stopping at either end of the track.
    #[must_use]
    pub fn offset(self, delta: i16) -> Self {
        let moved = (i16::from(self.0) + delta).clamp(i16::from(Self::MIN), i16::from(Self::MAX));
        Self(moved as u8)
    }
}

impl Default for SliderPosition {
    /// Mid-track, which puts every parameter at its teaching default.
    fn default() -> Self {
        Self(50)
    }
}

impl TryFrom<u16> for SliderPosition {
    type Error = SliderRangeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Current values of the four scalars, already scaled to their domains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub x: f64,
    pub slope: f64,
    pub x_error: f64,
    pub slope_error: f64,
}

impl Parameters {
    #[must_use]
    pub fn from_positions(positions: &[SliderPosition; 4]) -> Self {
        Self {
            x: Parameter::X.value_at(positions[Parameter::X.index()]),
            slope: Parameter::Slope.value_at(positions[Parameter::Slope.index()]),
            x_error: Parameter::XError.value_at(positions[Parameter::XError.index()]),
            slope_error: Parameter::SlopeError.value_at(positions[Parameter::SlopeError.index()]),
        }
    }

    #[must_use]
    pub const fn get(&self, parameter: Parameter) -> f64 {
        match parameter {
            Parameter::X => self.x,
            Parameter::Slope => self.slope,
            Parameter::XError => self.x_error,
            Parameter::SlopeError => self.slope_error,
        }
    }

    /// `y = m·x` at the current point.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.slope * self.x
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::from_positions(&[SliderPosition::default(); 4])
    }
}
