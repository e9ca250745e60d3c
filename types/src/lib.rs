//! Core domain types for Quadrature.
//!
//! Pure data and arithmetic with no IO: the error-propagation model for
//! `y = m·x`, the slider parameters that feed it, and the series descriptors
//! a rendering surface draws.

mod error_model;
mod layout;
mod overlay;
mod params;
mod series;
mod ui;

pub use error_model::{ErrorBudget, error_from_slope, error_from_x, total_error};
pub use layout::{AxisRange, LegendAnchor, PlotLayout};
pub use overlay::{Overlay, Visibility};
pub use params::{Parameter, Parameters, SliderPosition, SliderRangeError};
pub use series::{
    Dash, ErrorBar, LineStyle, Rgb, Series, SeriesId, SeriesKind, SeriesSet, palette,
};
pub use ui::UiOptions;
