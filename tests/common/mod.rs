//! Shared test utilities and fixtures
//!
//! Key-event builders and a plain-text rendering of the series list.

#![allow(dead_code)]

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use quadrature_engine::{App, Series};

pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn shift(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::SHIFT))
}

pub fn ch(c: char) -> Event {
    key(KeyCode::Char(c))
}

/// Feed events through the same path the terminal loop uses.
pub fn press_all(app: &mut App, events: &[Event]) {
    for ev in events {
        quadrature_tui::apply_event(app, ev);
    }
}

/// One line per series: id, visibility, coordinates, then error bars.
pub fn describe(series: &[Series]) -> String {
    series
        .iter()
        .map(|s| {
            let mut line = format!(
                "{:<10} {} ",
                format!("{:?}", s.id),
                if s.visible { "shown " } else { "hidden" }
            );
            let points: Vec<_> = s
                .points
                .iter()
                .map(|(x, y)| format!("({x:.2}, {y:.2})"))
                .collect();
            line.push_str(&points.join(" "));
            for (axis, bar) in [("x", s.error_x), ("y", s.error_y)] {
                if let Some(bar) = bar {
                    let state = if bar.visible { "shown" } else { "hidden" };
                    line.push_str(&format!(" {axis}±{:.2} {state}", bar.value));
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}
