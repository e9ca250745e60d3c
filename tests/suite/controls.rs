//! Control panel behavior: focus, toggles, and what gets handed to the surface.

use crossterm::event::KeyCode;

use quadrature_engine::{App, Control, Overlay, Parameter, SeriesId, SeriesSet};
use quadrature_tui::ChartSurface;

use crate::common::{ch, key, press_all};

#[test]
fn tab_walks_sliders_then_checkboxes() {
    let mut app = App::new(None);
    let mut seen = vec![app.focus()];
    for _ in 0..9 {
        press_all(&mut app, &[key(KeyCode::Tab)]);
        seen.push(app.focus());
    }
    assert_eq!(seen, Control::ALL);
    press_all(&mut app, &[key(KeyCode::Tab)]);
    assert_eq!(app.focus(), Control::Slider(Parameter::X));
}

#[test]
fn toggles_touch_only_visibility() {
    let mut app = App::new(None);
    let before = app.series().to_vec();
    press_all(&mut app, &[ch('1'), ch('2'), ch('3'), ch('4'), ch('5'), ch('6')]);

    for (old, new) in before.iter().zip(app.series()) {
        assert_eq!(old.id, new.id);
        assert_eq!(old.points, new.points);
        assert_eq!(old.style, new.style);
        assert_eq!(old.name, new.name);
        assert!(new.visible);
    }
    assert!(app.plot().get(SeriesId::Point).error_x.unwrap().visible);
}

#[test]
fn dirty_set_accumulates_until_taken() {
    let mut app = App::new(None);
    press_all(&mut app, &[ch('4')]);
    press_all(&mut app, &[key(KeyCode::Down), key(KeyCode::Right)]);
    let dirty = app.take_dirty();
    assert!(dirty.contains(SeriesSet::X_BOUNDS));
    assert!(dirty.contains(SeriesSet::BASE_LINE | SeriesSet::SLOPE_BOUNDS));
    assert!(app.take_dirty().is_empty());
}

#[test]
fn surface_receives_one_update_per_changed_frame() {
    let mut app = App::new(None);
    let mut surface = ChartSurface::new();
    app.create_plot(&mut surface).unwrap();

    assert!(!app.present(&mut surface).unwrap());
    press_all(&mut app, &[ch('2'), key(KeyCode::Right)]);
    assert!(app.present(&mut surface).unwrap());
    assert!(!app.present(&mut surface).unwrap());
    assert_eq!(surface.updates(), 1);
    assert!(app.is_visible(Overlay::SlopeBounds));
}
