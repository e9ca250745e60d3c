//! Application state: the plot plus the control panel that drives it.

use std::mem;

use tracing::{debug, info};

use quadrature_types::{
    ErrorBudget, Overlay, Parameter, Parameters, PlotLayout, Series, SeriesSet, SliderPosition,
    UiOptions, Visibility,
};

use crate::config::{QuadratureConfig, default_ui_options};
use crate::state::PlotStateManager;
use crate::surface::{RenderSurface, SurfaceError};

/// One focusable control in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Slider(Parameter),
    Toggle(Overlay),
}

impl Control {
    /// Panel order: the four sliders, then the six overlay checkboxes.
    pub const ALL: [Control; 10] = [
        Control::Slider(Parameter::X),
        Control::Slider(Parameter::Slope),
        Control::Slider(Parameter::XError),
        Control::Slider(Parameter::SlopeError),
        Control::Toggle(Overlay::XErrorBars),
        Control::Toggle(Overlay::SlopeBounds),
        Control::Toggle(Overlay::YBounds),
        Control::Toggle(Overlay::XBounds),
        Control::Toggle(Overlay::YxBounds),
        Control::Toggle(Overlay::YmBounds),
    ];
}

/// Slider steps for a coarse (Shift) move.
pub const COARSE_STEP: i16 = 10;

pub struct App {
    plot: PlotStateManager,
    positions: [SliderPosition; 4],
    focus: usize,
    ui_options: UiOptions,
    layout: PlotLayout,
    /// Series changed since the surface last saw them.
    dirty: SeriesSet,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Option<&QuadratureConfig>) -> Self {
        let (positions, visibility, ui_options) = match config {
            Some(config) => (
                config.slider_positions(),
                config.visibility(),
                config.ui_options(),
            ),
            None => (
                [SliderPosition::default(); 4],
                Visibility::default(),
                default_ui_options(),
            ),
        };
        let params = Parameters::from_positions(&positions);
        info!(
            x = params.x,
            m = params.slope,
            err_x = params.x_error,
            err_m = params.slope_error,
            "Initial plot state"
        );
        Self {
            plot: PlotStateManager::new(params, visibility),
            positions,
            focus: 0,
            ui_options,
            layout: PlotLayout::default(),
            dirty: SeriesSet::empty(),
            should_quit: false,
        }
    }

    #[must_use]
    pub const fn plot(&self) -> &PlotStateManager {
        &self.plot
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        self.plot.series()
    }

    #[must_use]
    pub const fn errors(&self) -> ErrorBudget {
        self.plot.errors()
    }

    #[must_use]
    pub const fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub const fn ui_options(&self) -> UiOptions {
        self.ui_options
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ------------------------------------------------------------------
    // Focus
    // ------------------------------------------------------------------

    #[must_use]
    pub fn focus(&self) -> Control {
        Control::ALL[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Control::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Control::ALL.len() - 1) % Control::ALL.len();
    }

    // ------------------------------------------------------------------
    // Sliders
    // ------------------------------------------------------------------

    #[must_use]
    pub fn slider_position(&self, parameter: Parameter) -> SliderPosition {
        self.positions[parameter.index()]
    }

    #[must_use]
    pub fn slider_value(&self, parameter: Parameter) -> f64 {
        self.plot.params().get(parameter)
    }

    /// Move a slider to `position` and push the scaled value into the plot.
    pub fn set_slider(&mut self, parameter: Parameter, position: SliderPosition) -> SeriesSet {
        if self.positions[parameter.index()] == position {
            return SeriesSet::empty();
        }
        self.positions[parameter.index()] = position;
        let value = parameter.value_at(position);
        debug!(?parameter, position = position.get(), value, "Slider moved");
        let regenerated = self.plot.set(parameter, value);
        self.dirty |= regenerated;
        regenerated
    }

    /// Nudge the focused slider by `steps`. No-op when a checkbox has focus.
    pub fn nudge_focused(&mut self, steps: i16) -> SeriesSet {
        match self.focus() {
            Control::Slider(parameter) => {
                let position = self.slider_position(parameter).offset(steps);
                self.set_slider(parameter, position)
            }
            Control::Toggle(_) => SeriesSet::empty(),
        }
    }

    /// Jump the focused slider to either end of its track.
    pub fn jump_focused(&mut self, to_max: bool) -> SeriesSet {
        match self.focus() {
            Control::Slider(parameter) => {
                let position = if to_max {
                    SliderPosition::max()
                } else {
                    SliderPosition::min()
                };
                self.set_slider(parameter, position)
            }
            Control::Toggle(_) => SeriesSet::empty(),
        }
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    #[must_use]
    pub fn is_visible(&self, overlay: Overlay) -> bool {
        self.plot.visibility().is_visible(overlay)
    }

    pub fn set_overlay(&mut self, overlay: Overlay, visible: bool) -> SeriesSet {
        debug!(?overlay, visible, "Overlay toggled");
        let regenerated = self.plot.set_visibility(overlay, visible);
        self.dirty |= regenerated;
        regenerated
    }

    pub fn toggle_overlay(&mut self, overlay: Overlay) -> SeriesSet {
        self.set_overlay(overlay, !self.is_visible(overlay))
    }

    /// Toggle the focused checkbox. No-op when a slider has focus.
    pub fn toggle_focused(&mut self) -> SeriesSet {
        match self.focus() {
            Control::Toggle(overlay) => self.toggle_overlay(overlay),
            Control::Slider(_) => SeriesSet::empty(),
        }
    }

    // ------------------------------------------------------------------
    // Rendering handoff
    // ------------------------------------------------------------------

    /// Series changed since the last call, clearing the record.
    pub fn take_dirty(&mut self) -> SeriesSet {
        mem::replace(&mut self.dirty, SeriesSet::empty())
    }

    /// Initial plot creation on `surface`.
    pub fn create_plot(&mut self, surface: &mut impl RenderSurface) -> Result<(), SurfaceError> {
        self.dirty = SeriesSet::empty();
        surface.create(self.layout, self.plot.series())
    }

    /// Hand the full series list to `surface` if anything changed.
    ///
    /// Returns whether an update was sent.
    pub fn present(&mut self, surface: &mut impl RenderSurface) -> Result<bool, SurfaceError> {
        if self.take_dirty().is_empty() {
            return Ok(false);
        }
        surface.update(self.plot.series())?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use quadrature_types::{Overlay, Parameter, SeriesId, SeriesSet, SliderPosition};

    use super::{App, COARSE_STEP, Control};
    use crate::config::QuadratureConfig;
    use crate::surface::SurfaceError;
    use crate::surface::testing::RecordingSurface;

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut app = App::new(None);
        assert_eq!(app.focus(), Control::Slider(Parameter::X));
        app.focus_prev();
        assert_eq!(app.focus(), Control::Toggle(Overlay::YmBounds));
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus(), Control::Slider(Parameter::Slope));
    }

    #[test]
    fn nudging_slider_updates_plot() {
        let mut app = App::new(None);
        app.focus_next();
        let regenerated = app.nudge_focused(COARSE_STEP);
        assert!(regenerated.contains(SeriesSet::BASE_LINE));
        assert_eq!(app.slider_position(Parameter::Slope).get(), 60);
        assert_eq!(app.slider_value(Parameter::Slope), 1.2);
        assert_eq!(app.plot().get(SeriesId::BaseLine).points[1].1, 12.0);
    }

    #[test]
    fn nudge_at_end_of_track_changes_nothing() {
        let mut app = App::new(None);
        app.jump_focused(true);
        app.take_dirty();
        assert!(app.nudge_focused(1).is_empty());
        assert!(app.take_dirty().is_empty());
        assert_eq!(app.slider_value(Parameter::X), 10.0);
    }

    #[test]
    fn slider_keys_ignore_checkboxes() {
        let mut app = App::new(None);
        for _ in 0..4 {
            app.focus_next();
        }
        assert_eq!(app.focus(), Control::Toggle(Overlay::XErrorBars));
        assert!(app.nudge_focused(1).is_empty());
        assert!(app.jump_focused(false).is_empty());

        let regenerated = app.toggle_focused();
        assert_eq!(regenerated, SeriesSet::POINT);
        assert!(app.is_visible(Overlay::XErrorBars));
    }

    #[test]
    fn toggle_keys_ignore_sliders() {
        let mut app = App::new(None);
        assert!(app.toggle_focused().is_empty());
    }

    #[test]
    fn config_seeds_positions_and_overlays() {
        let config: QuadratureConfig = toml::from_str(
            r"
            [sliders]
            x = 0
            [overlays]
            slope_bounds = true
            ",
        )
        .unwrap();
        let app = App::new(Some(&config));
        assert_eq!(app.slider_position(Parameter::X), SliderPosition::min());
        assert_eq!(app.errors().from_slope(), 0.0);
        assert!(app.is_visible(Overlay::SlopeBounds));
        assert!(app.plot().get(SeriesId::SlopeUpper).visible);
    }

    #[test]
    fn present_sends_full_list_only_after_changes() {
        let mut app = App::new(None);
        let mut surface = RecordingSurface::default();
        app.create_plot(&mut surface).unwrap();
        assert_eq!(surface.frames.len(), 1);

        assert!(!app.present(&mut surface).unwrap());
        assert_eq!(surface.frames.len(), 1);

        app.toggle_overlay(Overlay::YBounds);
        app.set_slider(Parameter::XError, SliderPosition::new(10).unwrap());
        assert!(app.present(&mut surface).unwrap());
        assert_eq!(surface.frames.len(), 2);

        let drawn = &surface.frames[1];
        assert_eq!(drawn.len(), SeriesId::ALL.len());
        assert_eq!(drawn, app.series());
        assert!(drawn[SeriesId::YUpper.index()].visible);
    }

    #[test]
    fn present_before_create_fails() {
        let mut app = App::new(None);
        let mut surface = RecordingSurface::default();
        app.toggle_overlay(Overlay::XBounds);
        let err = app.present(&mut surface).unwrap_err();
        assert!(matches!(err, SurfaceError::NotCreated));
    }
}
