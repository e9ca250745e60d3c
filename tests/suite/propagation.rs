//! Error propagation observed through the app, driven by slider keys.

use crossterm::event::KeyCode;

use quadrature_engine::{App, Parameter, SeriesId};
use quadrature_types::{error_from_slope, error_from_x, total_error};

use crate::common::{key, press_all, shift};

fn assert_consistent(app: &App) {
    let p = app.plot().params();
    let errors = app.errors();
    assert_eq!(errors.from_x(), error_from_x(p.slope, p.x_error));
    assert_eq!(errors.from_slope(), error_from_slope(p.x, p.slope_error));
    assert_eq!(
        errors.total(),
        total_error(p.x, p.slope, p.x_error, p.slope_error)
    );

    let y = p.slope * p.x;
    let point = app.plot().get(SeriesId::Point);
    assert_eq!(point.points, [(p.x, y)]);
    assert_eq!(point.error_y.unwrap().value, errors.total());
    assert_eq!(point.error_x.unwrap().value, p.x_error);
    assert_eq!(app.plot().get(SeriesId::YUpper).points[0].1, y + errors.total());
    assert_eq!(app.plot().get(SeriesId::YxLower).points[0].1, y - errors.from_x());
    assert_eq!(app.plot().get(SeriesId::YmUpper).points[1].1, y + errors.from_slope());
    assert_eq!(app.plot().get(SeriesId::XRight).points[0].0, p.x + p.x_error);
    assert_eq!(app.plot().get(SeriesId::BaseLine).points[1].1, p.slope * 10.0);
    assert_eq!(
        app.plot().get(SeriesId::SlopeLower).points[1].1,
        (p.slope - p.slope_error) * 10.0
    );
}

#[test]
fn reference_state_matches_worked_example() {
    let app = App::new(None);
    assert_eq!(app.errors().from_x(), 1.0);
    assert_eq!(app.errors().from_slope(), 2.5);
    assert!((app.errors().total() - 2.6926).abs() < 1e-4);
    assert_consistent(&app);
}

#[test]
fn x_at_origin_leaves_only_x_contribution() {
    let mut app = App::new(None);
    press_all(&mut app, &[key(KeyCode::Home)]);
    assert_eq!(app.slider_value(Parameter::X), 0.0);
    assert_eq!(app.errors().from_slope(), 0.0);
    assert_eq!(app.errors().total(), app.errors().from_x());
    assert_eq!(app.errors().total(), 1.0);
    assert_consistent(&app);
}

#[test]
fn every_slider_sweep_keeps_derived_state_consistent() {
    let mut app = App::new(None);
    for _ in 0..4 {
        press_all(&mut app, &[key(KeyCode::Home)]);
        assert_consistent(&app);
        for _ in 0..10 {
            press_all(&mut app, &[shift(KeyCode::Right)]);
            assert_consistent(&app);
        }
        for _ in 0..7 {
            press_all(&mut app, &[key(KeyCode::Left)]);
            assert_consistent(&app);
        }
        press_all(&mut app, &[key(KeyCode::Down)]);
    }
}

#[test]
fn slope_slider_moves_slope_line_endpoint() {
    let mut app = App::new(None);
    press_all(
        &mut app,
        &[key(KeyCode::Down), shift(KeyCode::Right), shift(KeyCode::Right)],
    );
    let m = app.slider_value(Parameter::Slope);
    assert_eq!(m, 2.0 * (70.0 / 100.0));
    let err_m = app.slider_value(Parameter::SlopeError);
    assert_eq!(app.plot().get(SeriesId::BaseLine).points[1], (10.0, m * 10.0));
    assert_eq!(
        app.plot().get(SeriesId::SlopeUpper).points[1],
        (10.0, (m + err_m) * 10.0)
    );
    assert_eq!(
        app.plot().get(SeriesId::SlopeLower).points[1],
        (10.0, (m - err_m) * 10.0)
    );
}
