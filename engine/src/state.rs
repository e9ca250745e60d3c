//! Plot state: the scalar parameters, their derived error magnitudes, the
//! overlay flags, and the series descriptors built from all of them.
//!
//! Every mutator recomputes what depends on the changed input and rebuilds
//! the affected series in full before returning, so a caller can never read
//! a series built from a stale magnitude.

use tracing::debug;

use quadrature_types::{
    ErrorBar, ErrorBudget, Overlay, Parameter, Parameters, Series, SeriesId, SeriesSet, Visibility,
};

/// Series rebuilt by each scalar mutator.
///
/// A series is listed when it reads the changed scalar directly or reads a
/// derived magnitude that the scalar feeds.
mod refresh {
    use quadrature_types::SeriesSet;

    pub const X: SeriesSet = SeriesSet::POINT
        .union(SeriesSet::Y_BOUNDS)
        .union(SeriesSet::X_BOUNDS)
        .union(SeriesSet::YX_BOUNDS)
        .union(SeriesSet::YM_BOUNDS);

    // errY_x = |m·errX| and every horizontal bound is centred on m·x.
    pub const SLOPE: SeriesSet = SeriesSet::BASE_LINE
        .union(SeriesSet::POINT)
        .union(SeriesSet::SLOPE_BOUNDS)
        .union(SeriesSet::Y_BOUNDS)
        .union(SeriesSet::YX_BOUNDS)
        .union(SeriesSet::YM_BOUNDS);

    pub const X_ERROR: SeriesSet = SeriesSet::POINT
        .union(SeriesSet::Y_BOUNDS)
        .union(SeriesSet::X_BOUNDS)
        .union(SeriesSet::YX_BOUNDS);

    // The point's vertical error bar carries errY.
    pub const SLOPE_ERROR: SeriesSet = SeriesSet::POINT
        .union(SeriesSet::SLOPE_BOUNDS)
        .union(SeriesSet::Y_BOUNDS)
        .union(SeriesSet::YM_BOUNDS);
}

#[derive(Debug, Clone)]
pub struct PlotStateManager {
    params: Parameters,
    errors: ErrorBudget,
    visibility: Visibility,
    /// Indexed by `SeriesId::index`.
    series: Vec<Series>,
}

impl PlotStateManager {
    #[must_use]
    pub fn new(params: Parameters, visibility: Visibility) -> Self {
        let errors = ErrorBudget::of(&params);
        let mut state = Self {
            params,
            errors,
            visibility,
            series: Vec::with_capacity(SeriesId::ALL.len()),
        };
        let series = SeriesId::ALL.into_iter().map(|id| state.build(id)).collect();
        state.series = series;
        state
    }

    #[must_use]
    pub const fn params(&self) -> &Parameters {
        &self.params
    }

    #[must_use]
    pub const fn errors(&self) -> ErrorBudget {
        self.errors
    }

    #[must_use]
    pub const fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// The complete series list in draw order.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn get(&self, id: SeriesId) -> &Series {
        &self.series[id.index()]
    }

    pub fn set_x(&mut self, x: f64) -> SeriesSet {
        self.params.x = x;
        self.recompute_errors();
        self.regenerate(refresh::X)
    }

    pub fn set_m(&mut self, slope: f64) -> SeriesSet {
        self.params.slope = slope;
        self.recompute_errors();
        self.regenerate(refresh::SLOPE)
    }

    pub fn set_err_x(&mut self, x_error: f64) -> SeriesSet {
        self.params.x_error = x_error;
        self.recompute_errors();
        self.regenerate(refresh::X_ERROR)
    }

    pub fn set_err_m(&mut self, slope_error: f64) -> SeriesSet {
        self.params.slope_error = slope_error;
        self.recompute_errors();
        self.regenerate(refresh::SLOPE_ERROR)
    }

    /// Dispatch to the mutator owning `parameter`.
    pub fn set(&mut self, parameter: Parameter, value: f64) -> SeriesSet {
        match parameter {
            Parameter::X => self.set_x(value),
            Parameter::Slope => self.set_m(value),
            Parameter::XError => self.set_err_x(value),
            Parameter::SlopeError => self.set_err_m(value),
        }
    }

    /// Flip one overlay flag. Only the overlay's own series are rebuilt and
    /// no magnitude is recomputed.
    pub fn set_visibility(&mut self, overlay: Overlay, visible: bool) -> SeriesSet {
        self.visibility.set(overlay, visible);
        self.regenerate(overlay.series())
    }

    fn recompute_errors(&mut self) {
        self.errors = ErrorBudget::of(&self.params);
    }

    fn regenerate(&mut self, set: SeriesSet) -> SeriesSet {
        for id in set.ids() {
            self.series[id.index()] = self.build(id);
        }
        debug!(
            x = self.params.x,
            m = self.params.slope,
            err_y = self.errors.total(),
            regenerated = ?set,
            "Plot state updated"
        );
        set
    }

    fn shown(&self, overlay: Overlay) -> bool {
        self.visibility.is_visible(overlay)
    }

    fn build(&self, id: SeriesId) -> Series {
        let Parameters {
            x,
            slope,
            x_error,
            slope_error,
        } = self.params;
        let y = self.params.y();
        let horizontal = |id: SeriesId, level: f64, visible: bool| {
            Series::segment(id, (0.0, level), (10.0, level), visible)
        };

        match id {
            SeriesId::BaseLine => Series::segment(id, (0.0, 0.0), (10.0, slope * 10.0), true),
            SeriesId::Point => Series {
                id,
                points: vec![(x, y)],
                error_x: Some(ErrorBar {
                    value: x_error,
                    visible: self.shown(Overlay::XErrorBars),
                }),
                error_y: Some(ErrorBar {
                    value: self.errors.total(),
                    visible: true,
                }),
                visible: true,
                name: id.legend_name(),
                style: id.style(),
            },
            SeriesId::SlopeUpper => Series::segment(
                id,
                (0.0, 0.0),
                (10.0, (slope + slope_error) * 10.0),
                self.shown(Overlay::SlopeBounds),
            ),
            SeriesId::SlopeLower => Series::segment(
                id,
                (0.0, 0.0),
                (10.0, (slope - slope_error) * 10.0),
                self.shown(Overlay::SlopeBounds),
            ),
            SeriesId::YUpper => horizontal(id, y + self.errors.total(), self.shown(Overlay::YBounds)),
            SeriesId::YLower => horizontal(id, y - self.errors.total(), self.shown(Overlay::YBounds)),
            SeriesId::XLeft => Series::segment(
                id,
                (x - x_error, 0.0),
                (x - x_error, 10.0),
                self.shown(Overlay::XBounds),
            ),
            SeriesId::XRight => Series::segment(
                id,
                (x + x_error, 0.0),
                (x + x_error, 10.0),
                self.shown(Overlay::XBounds),
            ),
            SeriesId::YxUpper => {
                horizontal(id, y + self.errors.from_x(), self.shown(Overlay::YxBounds))
            }
            SeriesId::YxLower => {
                horizontal(id, y - self.errors.from_x(), self.shown(Overlay::YxBounds))
            }
            SeriesId::YmUpper => {
                horizontal(id, y + self.errors.from_slope(), self.shown(Overlay::YmBounds))
            }
            SeriesId::YmLower => {
                horizontal(id, y - self.errors.from_slope(), self.shown(Overlay::YmBounds))
            }
        }
    }
}

impl Default for PlotStateManager {
    fn default() -> Self {
        Self::new(Parameters::default(), Visibility::default())
    }
}
