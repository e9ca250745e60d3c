//! Series descriptors: the unit of data handed to a rendering surface.
//!
//! The plot is always made of the same twelve series in the same order, so
//! legend order and z-order never change between redraws. Each series is
//! rebuilt from scratch whenever anything it depends on changes.

use bitflags::bitflags;

/// Fixed identity (and draw order) of every series on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesId {
    BaseLine,
    Point,
    SlopeUpper,
    SlopeLower,
    YUpper,
    YLower,
    XLeft,
    XRight,
    YxUpper,
    YxLower,
    YmUpper,
    YmLower,
}

impl SeriesId {
    /// Draw order.
    pub const ALL: [SeriesId; 12] = [
        SeriesId::BaseLine,
        SeriesId::Point,
        SeriesId::SlopeUpper,
        SeriesId::SlopeLower,
        SeriesId::YUpper,
        SeriesId::YLower,
        SeriesId::XLeft,
        SeriesId::XRight,
        SeriesId::YxUpper,
        SeriesId::YxLower,
        SeriesId::YmUpper,
        SeriesId::YmLower,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            SeriesId::BaseLine => 0,
            SeriesId::Point => 1,
            SeriesId::SlopeUpper => 2,
            SeriesId::SlopeLower => 3,
            SeriesId::YUpper => 4,
            SeriesId::YLower => 5,
            SeriesId::XLeft => 6,
            SeriesId::XRight => 7,
            SeriesId::YxUpper => 8,
            SeriesId::YxLower => 9,
            SeriesId::YmUpper => 10,
            SeriesId::YmLower => 11,
        }
    }

    #[must_use]
    pub const fn flag(self) -> SeriesSet {
        SeriesSet::from_bits_retain(1 << self.index())
    }

    #[must_use]
    pub const fn kind(self) -> SeriesKind {
        match self {
            SeriesId::Point => SeriesKind::Marker,
            _ => SeriesKind::Line,
        }
    }

    /// Legend entry. Only the first line of each bound pair is named, so
    /// every pair shows up once in the legend.
    #[must_use]
    pub const fn legend_name(self) -> Option<&'static str> {
        match self {
            SeriesId::SlopeUpper => Some("Slope error"),
            SeriesId::YUpper => Some("y error"),
            SeriesId::XLeft => Some("x error"),
            SeriesId::YxUpper => Some("y_x error"),
            SeriesId::YmUpper => Some("y_m error"),
            _ => None,
        }
    }

    #[must_use]
    pub const fn style(self) -> LineStyle {
        match self {
            SeriesId::BaseLine => LineStyle::solid(None, palette::BASE_LINE),
            SeriesId::Point => LineStyle::solid(None, palette::POINT),
            SeriesId::SlopeUpper | SeriesId::SlopeLower => {
                LineStyle::solid(Some(2), palette::SLOPE_BOUNDS)
            }
            SeriesId::YUpper | SeriesId::YLower => LineStyle::dotted(4, palette::Y_BOUNDS),
            SeriesId::XLeft | SeriesId::XRight | SeriesId::YxUpper | SeriesId::YxLower => {
                LineStyle::dotted(2, palette::X_BOUNDS)
            }
            SeriesId::YmUpper | SeriesId::YmLower => LineStyle::dotted(2, palette::YM_BOUNDS),
        }
    }
}

bitflags! {
    /// A set of series, used to report what a mutation regenerated.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SeriesSet: u16 {
        const BASE_LINE = 1 << 0;
        const POINT = 1 << 1;
        const SLOPE_UPPER = 1 << 2;
        const SLOPE_LOWER = 1 << 3;
        const Y_UPPER = 1 << 4;
        const Y_LOWER = 1 << 5;
        const X_LEFT = 1 << 6;
        const X_RIGHT = 1 << 7;
        const YX_UPPER = 1 << 8;
        const YX_LOWER = 1 << 9;
        const YM_UPPER = 1 << 10;
        const YM_LOWER = 1 << 11;

        const SLOPE_BOUNDS = Self::SLOPE_UPPER.bits() | Self::SLOPE_LOWER.bits();
        const Y_BOUNDS = Self::Y_UPPER.bits() | Self::Y_LOWER.bits();
        const X_BOUNDS = Self::X_LEFT.bits() | Self::X_RIGHT.bits();
        const YX_BOUNDS = Self::YX_UPPER.bits() | Self::YX_LOWER.bits();
        const YM_BOUNDS = Self::YM_UPPER.bits() | Self::YM_LOWER.bits();
    }
}

impl SeriesSet {
    /// Members in draw order.
    pub fn ids(self) -> impl Iterator<Item = SeriesId> {
        SeriesId::ALL
            .into_iter()
            .filter(move |id| self.contains(id.flag()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// Connected segment through the coordinate pairs.
    Line,
    /// Single marker, optionally with error bars.
    Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dash {
    Solid,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Colors the plot has always used for each series.
pub mod palette {
    use super::Rgb;

    pub const BASE_LINE: Rgb = Rgb(31, 119, 180);
    pub const POINT: Rgb = Rgb(255, 127, 14);
    pub const SLOPE_BOUNDS: Rgb = Rgb(255, 0, 0);
    pub const Y_BOUNDS: Rgb = Rgb(0, 153, 51);
    pub const X_BOUNDS: Rgb = Rgb(204, 0, 0);
    pub const YM_BOUNDS: Rgb = Rgb(51, 204, 204);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineStyle {
    /// `None` leaves the width to the surface.
    pub width: Option<u8>,
    pub dash: Dash,
    pub color: Rgb,
}

impl LineStyle {
    #[must_use]
    pub const fn solid(width: Option<u8>, color: Rgb) -> Self {
        Self {
            width,
            dash: Dash::Solid,
            color,
        }
    }

    #[must_use]
    pub const fn dotted(width: u8, color: Rgb) -> Self {
        Self {
            width: Some(width),
            dash: Dash::Dot,
            color,
        }
    }
}

/// Constant-magnitude error bar along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBar {
    pub value: f64,
    pub visible: bool,
}

/// One named, styled piece of plot geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: SeriesId,
    pub points: Vec<(f64, f64)>,
    pub error_x: Option<ErrorBar>,
    pub error_y: Option<ErrorBar>,
    pub visible: bool,
    pub name: Option<&'static str>,
    pub style: LineStyle,
}

impl Series {
    /// A straight segment between two points, styled for `id`.
    #[must_use]
    pub fn segment(id: SeriesId, from: (f64, f64), to: (f64, f64), visible: bool) -> Self {
        Self {
            id,
            points: vec![from, to],
            error_x: None,
            error_y: None,
            visible,
            name: id.legend_name(),
            style: id.style(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> SeriesKind {
        self.id.kind()
    }
}
