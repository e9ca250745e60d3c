//! Core engine for Quadrature - plot state and orchestration.
//!
//! This crate owns all mutable state without any terminal dependencies.
//! Input layers call the mutators on [`App`]; the rendering layer receives
//! the regenerated series through a [`RenderSurface`].

mod app;
mod config;
mod state;
mod surface;

pub use app::{App, COARSE_STEP, Control};
pub use config::{
    AppConfig, ConfigError, OverlaysConfig, QuadratureConfig, SlidersConfig, config_path,
};
pub use state::PlotStateManager;
pub use surface::{RenderSurface, SurfaceError};

pub use quadrature_types::{
    ErrorBar, ErrorBudget, Overlay, Parameter, Parameters, PlotLayout, Series, SeriesId,
    SeriesKind, SeriesSet, SliderPosition, UiOptions, Visibility,
};
