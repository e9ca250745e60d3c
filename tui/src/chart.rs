//! Chart surface: turns series descriptors into ratatui datasets.
//!
//! The terminal has no notion of line width or dash pattern, so both are
//! approximated. Dotted lines become sparse scatter samples along the
//! segment, and wide lines use a heavier marker.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, BorderType, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

use quadrature_engine::{RenderSurface, SurfaceError};
use quadrature_types::{Dash, LegendAnchor, PlotLayout, Rgb, Series, SeriesKind};

use crate::theme::{Palette, styles};

/// Distance between samples of a dotted line, in plot units.
const DOT_SPACING: f64 = 0.25;
/// Widths above this use the heavier marker.
const THIN_LINE_MAX: u8 = 2;

/// One ratatui dataset, owning its coordinates so the chart can borrow them.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Trace {
    pub(crate) name: Option<&'static str>,
    pub(crate) color: Rgb,
    pub(crate) marker: Marker,
    pub(crate) graph_type: GraphType,
    pub(crate) data: Vec<(f64, f64)>,
}

/// Holds the plot between `create` and each `update`, and draws it.
#[derive(Debug, Default)]
pub struct ChartSurface {
    layout: Option<PlotLayout>,
    traces: Vec<Trace>,
    updates: u64,
}

impl ChartSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_created(&self) -> bool {
        self.layout.is_some()
    }

    /// Number of `update` calls since `create`.
    #[must_use]
    pub fn updates(&self) -> u64 {
        self.updates
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::border(palette))
            .title(Span::styled(
                " y = m·x ",
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(palette.bg_dark));

        let Some(layout) = self.layout else {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                "plot not created",
                styles::key_hint(palette),
            )))
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(placeholder, area);
            return;
        };

        let datasets: Vec<Dataset> = self
            .traces
            .iter()
            .map(|trace| {
                let dataset = Dataset::default()
                    .marker(trace.marker)
                    .graph_type(trace.graph_type)
                    .style(Style::default().fg(palette.series(trace.color)))
                    .data(&trace.data);
                match trace.name {
                    Some(name) => dataset.name(name),
                    None => dataset,
                }
            })
            .collect();

        let axis_style = Style::default().fg(palette.text_muted);
        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("x")
                    .style(axis_style)
                    .bounds(layout.x_axis.bounds())
                    .labels(axis_labels(layout.x_axis.min, layout.x_axis.max)),
            )
            .y_axis(
                Axis::default()
                    .title("y")
                    .style(axis_style)
                    .bounds(layout.y_axis.bounds())
                    .labels(axis_labels(layout.y_axis.min, layout.y_axis.max)),
            )
            .legend_position(layout.show_legend.then_some(legend_position(layout.legend)))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)));

        frame.render_widget(chart, area);
    }

    #[cfg(test)]
    pub(crate) fn traces(&self) -> &[Trace] {
        &self.traces
    }
}

impl RenderSurface for ChartSurface {
    fn create(&mut self, layout: PlotLayout, series: &[Series]) -> Result<(), SurfaceError> {
        self.layout = Some(layout);
        self.traces = traces_for(series);
        self.updates = 0;
        Ok(())
    }

    fn update(&mut self, series: &[Series]) -> Result<(), SurfaceError> {
        if self.layout.is_none() {
            return Err(SurfaceError::NotCreated);
        }
        self.traces = traces_for(series);
        self.updates += 1;
        Ok(())
    }
}

fn legend_position(anchor: LegendAnchor) -> LegendPosition {
    match anchor {
        LegendAnchor::TopLeft => LegendPosition::TopLeft,
        LegendAnchor::TopRight => LegendPosition::TopRight,
    }
}

fn axis_labels(min: f64, max: f64) -> Vec<Line<'static>> {
    let mid = (min + max) / 2.0;
    [min, mid, max]
        .into_iter()
        .map(|value| Line::from(format!("{value}")))
        .collect()
}

/// Flatten the visible series into drawable traces, keeping series order.
pub(crate) fn traces_for(series: &[Series]) -> Vec<Trace> {
    let mut traces = Vec::with_capacity(series.len() + 2);
    for s in series.iter().filter(|s| s.visible) {
        match s.kind() {
            SeriesKind::Line => traces.push(line_trace(s)),
            SeriesKind::Marker => push_marker(&mut traces, s),
        }
    }
    traces
}

fn line_trace(series: &Series) -> Trace {
    let marker = match series.style.width {
        Some(width) if width > THIN_LINE_MAX => Marker::Dot,
        _ => Marker::Braille,
    };
    let (graph_type, data) = match series.style.dash {
        Dash::Solid => (GraphType::Line, series.points.clone()),
        Dash::Dot => (GraphType::Scatter, dotted(&series.points)),
    };
    Trace {
        name: series.name,
        color: series.style.color,
        marker,
        graph_type,
        data,
    }
}

/// A marker plus its error bars, each bar drawn as its own segment.
fn push_marker(traces: &mut Vec<Trace>, series: &Series) {
    let color = series.style.color;
    for &(x, y) in &series.points {
        if let Some(bar) = series.error_y.filter(|bar| bar.visible) {
            traces.push(bar_trace(color, (x, y - bar.value), (x, y + bar.value)));
        }
        if let Some(bar) = series.error_x.filter(|bar| bar.visible) {
            traces.push(bar_trace(color, (x - bar.value, y), (x + bar.value, y)));
        }
    }
    traces.push(Trace {
        name: series.name,
        color,
        marker: Marker::Block,
        graph_type: GraphType::Scatter,
        data: series.points.clone(),
    });
}

fn bar_trace(color: Rgb, from: (f64, f64), to: (f64, f64)) -> Trace {
    Trace {
        name: None,
        color,
        marker: Marker::Braille,
        graph_type: GraphType::Line,
        data: vec![from, to],
    }
}

/// Evenly spaced samples along each segment of a polyline, endpoints included.
fn dotted(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    for pair in points.windows(2) {
        let ((x0, y0), (x1, y1)) = (pair[0], pair[1]);
        let length = (x1 - x0).hypot(y1 - y0);
        let steps = ((length / DOT_SPACING).round() as usize).max(1);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            out.push((x0 + (x1 - x0) * t, y0 + (y1 - y0) * t));
        }
    }
    out
}
