//! Optional plot overlays and their visibility flags.

use crate::series::SeriesSet;

/// One of the six independently toggled overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Horizontal error bars on the point.
    XErrorBars,
    /// Lines through the origin with slopes `m ± errM`.
    SlopeBounds,
    /// Horizontal lines at `y ± errY`.
    YBounds,
    /// Vertical lines at `x ± errX`.
    XBounds,
    /// Horizontal lines at `y ± errY_x`.
    YxBounds,
    /// Horizontal lines at `y ± errY_m`.
    YmBounds,
}

impl Overlay {
    pub const ALL: [Overlay; 6] = [
        Overlay::XErrorBars,
        Overlay::SlopeBounds,
        Overlay::YBounds,
        Overlay::XBounds,
        Overlay::YxBounds,
        Overlay::YmBounds,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Overlay::XErrorBars => 0,
            Overlay::SlopeBounds => 1,
            Overlay::YBounds => 2,
            Overlay::XBounds => 3,
            Overlay::YxBounds => 4,
            Overlay::YmBounds => 5,
        }
    }

    /// Digit key that toggles this overlay directly.
    #[must_use]
    pub const fn hotkey(self) -> char {
        match self {
            Overlay::XErrorBars => '1',
            Overlay::SlopeBounds => '2',
            Overlay::YBounds => '3',
            Overlay::XBounds => '4',
            Overlay::YxBounds => '5',
            Overlay::YmBounds => '6',
        }
    }

    #[must_use]
    pub fn from_hotkey(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|overlay| overlay.hotkey() == key)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Overlay::XErrorBars => "x error bars",
            Overlay::SlopeBounds => "slope error lines",
            Overlay::YBounds => "y error lines",
            Overlay::XBounds => "x error lines",
            Overlay::YxBounds => "y_x error lines",
            Overlay::YmBounds => "y_m error lines",
        }
    }

    /// Series whose `visible` field (or error-bar visibility) follows this flag.
    #[must_use]
    pub const fn series(self) -> SeriesSet {
        match self {
            Overlay::XErrorBars => SeriesSet::POINT,
            Overlay::SlopeBounds => SeriesSet::SLOPE_BOUNDS,
            Overlay::YBounds => SeriesSet::Y_BOUNDS,
            Overlay::XBounds => SeriesSet::X_BOUNDS,
            Overlay::YxBounds => SeriesSet::YX_BOUNDS,
            Overlay::YmBounds => SeriesSet::YM_BOUNDS,
        }
    }
}

/// The six visibility flags. All hidden by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Visibility([bool; 6]);

impl Visibility {
    #[must_use]
    pub const fn is_visible(&self, overlay: Overlay) -> bool {
        self.0[overlay.index()]
    }

    /// Returns the previous value.
    pub fn set(&mut self, overlay: Overlay, visible: bool) -> bool {
        std::mem::replace(&mut self.0[overlay.index()], visible)
    }

    #[must_use]
    pub fn with(mut self, overlay: Overlay, visible: bool) -> Self {
        self.set(overlay, visible);
        self
    }
}
