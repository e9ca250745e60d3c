//! TUI rendering for Quadrature using ratatui.
//!
//! The screen is split into the plot (a [`ChartSurface`]) and a control panel
//! holding the four sliders, the six overlay checkboxes and a readout of the
//! propagated uncertainty.

mod chart;
mod input;
mod theme;

pub use chart::ChartSurface;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use quadrature_engine::{App, Control, Overlay, Parameter};

/// Width of the control panel, borders included.
pub const CONTROLS_WIDTH: u16 = 40;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App, surface: &ChartSurface) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Plot + controls
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(CONTROLS_WIDTH)])
        .split(rows[0]);

    surface.render(frame, columns[0], &palette);
    draw_controls(frame, app, columns[1], &palette, &glyphs);
    draw_key_hints(frame, rows[1], &palette, &glyphs);
}

fn draw_controls(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .title(Span::styled(
            " Controls ",
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(palette.bg_panel));
    let inner = block.inner(area);
    let track_width = usize::from(inner.width.saturating_sub(4));

    let focus = app.focus();
    let mut lines = Vec::new();
    for parameter in Parameter::ALL {
        let focused = focus == Control::Slider(parameter);
        lines.extend(slider_lines(
            app,
            parameter,
            focused,
            track_width,
            palette,
            glyphs,
        ));
    }
    lines.push(Line::from(""));
    for overlay in Overlay::ALL {
        let focused = focus == Control::Toggle(overlay);
        lines.push(toggle_line(app, overlay, focused, palette, glyphs));
    }
    lines.push(Line::from(""));
    lines.extend(readout_lines(app, palette, glyphs));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn focus_prefix(focused: bool, palette: &Palette, glyphs: &Glyphs) -> Span<'static> {
    if focused {
        Span::styled(format!("{} ", glyphs.selected), styles::focused(palette))
    } else {
        Span::raw("  ")
    }
}

fn slider_lines(
    app: &App,
    parameter: Parameter,
    focused: bool,
    track_width: usize,
    palette: &Palette,
    glyphs: &Glyphs,
) -> [Line<'static>; 2] {
    let label_style = if focused {
        styles::focused(palette)
    } else {
        styles::label(palette)
    };
    let header = Line::from(vec![
        focus_prefix(focused, palette, glyphs),
        Span::styled(parameter.label(), label_style),
        Span::raw("  "),
        Span::styled(
            format_value(app.slider_value(parameter)),
            styles::value(palette),
        ),
    ]);

    let position = app.slider_position(parameter).get();
    let (filled, empty) = track_split(position, track_width);
    let track = Line::from(vec![
        Span::raw("  "),
        Span::styled(glyphs.fill.repeat(filled), Style::default().fg(palette.accent)),
        Span::styled(
            glyphs.thumb,
            Style::default()
                .fg(if focused { palette.peach } else { palette.accent })
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            glyphs.track.repeat(empty),
            Style::default().fg(palette.text_muted),
        ),
    ]);

    [header, track]
}

/// Split a track of `width` cells into filled cells, the thumb, and empty cells.
fn track_split(position: u8, width: usize) -> (usize, usize) {
    if width == 0 {
        return (0, 0);
    }
    let cells = width - 1;
    let filled = (usize::from(position) * cells + 50) / 100;
    (filled, cells - filled)
}

fn toggle_line(
    app: &App,
    overlay: Overlay,
    focused: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) -> Line<'static> {
    let visible = app.is_visible(overlay);
    let (mark, mark_style) = if visible {
        (glyphs.checked, Style::default().fg(palette.enabled))
    } else {
        (glyphs.unchecked, Style::default().fg(palette.text_muted))
    };
    let label_style = if focused {
        styles::focused(palette)
    } else {
        styles::label(palette)
    };
    Line::from(vec![
        focus_prefix(focused, palette, glyphs),
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(overlay.hotkey().to_string(), styles::key_highlight(palette)),
        Span::raw(" "),
        Span::styled(overlay.label(), label_style),
    ])
}

fn readout_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let errors = app.errors();
    let params = app.plot().params();
    let row = |label: &'static str, value: f64| {
        Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("{label:<8}"), styles::label(palette)),
            Span::styled(format_value(value), styles::value(palette)),
        ])
    };
    vec![
        row("y", params.y()),
        row("errY", errors.total()),
        row("errY_x", errors.from_x()),
        row("errY_m", errors.from_slope()),
        Line::from(Span::styled(
            format!("  errY = {}(errY_x² + errY_m²)", glyphs.sqrt),
            styles::key_hint(palette),
        )),
    ]
}

fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let hints = [
        (glyphs.arrows_vertical, "focus"),
        (glyphs.arrows_horizontal, "adjust"),
        ("Shift", "x10"),
        ("Space", "toggle"),
        ("1-6", "overlays"),
        ("q", "quit"),
    ];
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(format!(" {key}"), styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {action} "), styles::key_hint(palette)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
