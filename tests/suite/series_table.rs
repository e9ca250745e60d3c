//! The full series list, as a rendering surface receives it.

use crossterm::event::KeyCode;
use insta::assert_snapshot;

use quadrature_engine::App;

use crate::common::{ch, describe, press_all, shift};

#[test]
fn initial_series_list() {
    let app = App::new(None);
    assert_snapshot!(describe(app.series()), @r"
    BaseLine   shown  (0.00, 0.00) (10.00, 10.00)
    Point      shown  (5.00, 5.00) x±1.00 hidden y±2.69 shown
    SlopeUpper hidden (0.00, 0.00) (10.00, 15.00)
    SlopeLower hidden (0.00, 0.00) (10.00, 5.00)
    YUpper     hidden (0.00, 7.69) (10.00, 7.69)
    YLower     hidden (0.00, 2.31) (10.00, 2.31)
    XLeft      hidden (4.00, 0.00) (4.00, 10.00)
    XRight     hidden (6.00, 0.00) (6.00, 10.00)
    YxUpper    hidden (0.00, 6.00) (10.00, 6.00)
    YxLower    hidden (0.00, 4.00) (10.00, 4.00)
    YmUpper    hidden (0.00, 7.50) (10.00, 7.50)
    YmLower    hidden (0.00, 2.50) (10.00, 2.50)
    ");
}

#[test]
fn series_list_after_moving_x_and_showing_y_bounds() {
    let mut app = App::new(None);
    press_all(&mut app, &[shift(KeyCode::Left), ch('3')]);
    assert_snapshot!(describe(app.series()), @r"
    BaseLine   shown  (0.00, 0.00) (10.00, 10.00)
    Point      shown  (4.00, 4.00) x±1.00 hidden y±2.24 shown
    SlopeUpper hidden (0.00, 0.00) (10.00, 15.00)
    SlopeLower hidden (0.00, 0.00) (10.00, 5.00)
    YUpper     shown  (0.00, 6.24) (10.00, 6.24)
    YLower     shown  (0.00, 1.76) (10.00, 1.76)
    XLeft      hidden (3.00, 0.00) (3.00, 10.00)
    XRight     hidden (5.00, 0.00) (5.00, 10.00)
    YxUpper    hidden (0.00, 5.00) (10.00, 5.00)
    YxLower    hidden (0.00, 3.00) (10.00, 3.00)
    YmUpper    hidden (0.00, 6.00) (10.00, 6.00)
    YmLower    hidden (0.00, 2.00) (10.00, 2.00)
    ");
}
