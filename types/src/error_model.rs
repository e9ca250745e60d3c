//! Propagation of uncertainty through `y = m·x`.
//!
//! The two error sources (uncertainty on `x`, uncertainty on the slope `m`)
//! are treated as independent and combined in quadrature.

use crate::params::Parameters;

/// Uncertainty on `y` contributed by the slope uncertainty, holding `x` fixed.
#[must_use]
pub fn error_from_slope(x: f64, slope_error: f64) -> f64 {
    (x * slope_error).abs()
}

/// Uncertainty on `y` contributed by the uncertainty on `x`, holding `m` fixed.
#[must_use]
pub fn error_from_x(slope: f64, x_error: f64) -> f64 {
    (slope * x_error).abs()
}

/// Total uncertainty on `y`: the quadrature sum of both contributions.
#[must_use]
pub fn total_error(x: f64, slope: f64, x_error: f64, slope_error: f64) -> f64 {
    let from_x = error_from_x(slope, x_error);
    let from_slope = error_from_slope(x, slope_error);
    quadrature(from_x, from_slope)
}

// Not `f64::hypot`: must equal `sqrt(a² + b²)` bit for bit.
fn quadrature(a: f64, b: f64) -> f64 {
    (a * a + b * b).sqrt()
}

/// The three derived magnitudes, always computed together from one
/// [`Parameters`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBudget {
    total: f64,
    from_x: f64,
    from_slope: f64,
}

impl ErrorBudget {
    #[must_use]
    pub fn of(params: &Parameters) -> Self {
        let from_x = error_from_x(params.slope, params.x_error);
        let from_slope = error_from_slope(params.x, params.slope_error);
        Self {
            total: quadrature(from_x, from_slope),
            from_x,
            from_slope,
        }
    }

    /// `errY`
    #[must_use]
    pub const fn total(self) -> f64 {
        self.total
    }

    /// `errY_x`
    #[must_use]
    pub const fn from_x(self) -> f64 {
        self.from_x
    }

    /// `errY_m`
    #[must_use]
    pub const fn from_slope(self) -> f64 {
        self.from_slope
    }
}
