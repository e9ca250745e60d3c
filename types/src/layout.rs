//! Fixed plot layout shared by every rendering surface.

/// Closed axis range. The plot never autoscales.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    #[must_use]
    pub const fn bounds(&self) -> [f64; 2] {
        [self.min, self.max]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendAnchor {
    #[default]
    TopLeft,
    TopRight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotLayout {
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    pub show_legend: bool,
    pub legend: LegendAnchor,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            x_axis: AxisRange::new(0.0, 10.0),
            y_axis: AxisRange::new(0.0, 10.0),
            show_legend: true,
            legend: LegendAnchor::TopLeft,
        }
    }
}
