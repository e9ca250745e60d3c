//! The seam between plot state and whatever draws it.

use thiserror::Error;

use quadrature_types::{PlotLayout, Series};

#[derive(Debug, Error)]
pub enum SurfaceError {
    /// `update` was called before `create`.
    #[error("plot has not been created yet")]
    NotCreated,
    #[error("rendering surface unavailable: {0}")]
    Unavailable(String),
}

/// A drawing target that accepts the full, ordered series list.
///
/// `create` establishes the plot and its fixed layout. `update` swaps in a
/// new series list and must keep whatever view state the surface holds.
pub trait RenderSurface {
    fn create(&mut self, layout: PlotLayout, series: &[Series]) -> Result<(), SurfaceError>;

    fn update(&mut self, series: &[Series]) -> Result<(), SurfaceError>;
}
